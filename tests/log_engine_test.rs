//! Tests for the legacy action-log engine

use std::collections::HashMap;

use rstest::{fixture, rstest};

use orgtree::roster;
use orgtree::util::testing;
use orgtree::{Employee, EngineError, LogEngine};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn engine() -> LogEngine {
    LogEngine::new(roster::sample())
}

fn child_ids(root: &Employee, id: u32) -> Vec<u32> {
    root.find(id)
        .expect("node present")
        .children
        .iter()
        .map(|child| child.id)
        .collect()
}

fn parent_map(root: &Employee) -> HashMap<u32, u32> {
    let mut parents = HashMap::new();
    for node in root.iter() {
        for child in &node.children {
            parents.insert(child.id, node.id);
        }
    }
    parents
}

#[rstest]
fn given_sample_tree_when_moving_7_under_2_then_7_leaves_6(mut engine: LogEngine) {
    engine.move_employee(7, 2).unwrap();

    assert_eq!(child_ids(engine.root(), 2), vec![3, 7]);
    assert!(child_ids(engine.root(), 6).is_empty());
}

#[rstest]
fn given_a_manager_when_moving_then_the_whole_subtree_follows(mut engine: LogEngine) {
    engine.move_employee(5, 8).unwrap();

    assert_eq!(child_ids(engine.root(), 3), vec![4]);
    assert_eq!(child_ids(engine.root(), 5), vec![6]);
    assert_eq!(child_ids(engine.root(), 6), vec![7]);
}

#[rstest]
fn given_a_move_when_undoing_then_tree_matches_initial_state(mut engine: LogEngine) {
    let initial = engine.root().clone();

    engine.move_employee(7, 2).unwrap();
    engine.undo().unwrap();

    // 7 was the only report of 6, so even the child order is restored
    assert_eq!(engine.root(), &initial);
}

#[rstest]
fn given_a_mid_list_employee_when_moving_and_undoing_then_relationships_are_restored(
    mut engine: LogEngine,
) {
    let initial = engine.root().clone();

    // 9 sits first among 8's reports; undo appends it back at the end
    engine.move_employee(9, 13).unwrap();
    engine.undo().unwrap();

    assert_eq!(parent_map(engine.root()), parent_map(&initial));
    assert_eq!(child_ids(engine.root(), 8), vec![11, 12, 9]);
}

#[rstest]
fn given_fresh_engine_when_undoing_then_fails(mut engine: LogEngine) {
    let before = engine.root().clone();

    assert_eq!(engine.undo(), Err(EngineError::NothingToUndo));
    assert_eq!(engine.root(), &before);
}

#[rstest]
fn given_any_state_when_redoing_then_redo_is_unsupported(mut engine: LogEngine) {
    assert_eq!(engine.redo(), Err(EngineError::RedoUnsupported));

    engine.move_employee(7, 2).unwrap();
    engine.undo().unwrap();
    assert_eq!(engine.redo(), Err(EngineError::RedoUnsupported));
}

#[rstest]
fn given_invalid_ids_when_moving_then_fails_and_tree_is_unchanged(mut engine: LogEngine) {
    let before = engine.root().clone();

    let result = engine.move_employee(999, 2);

    assert_eq!(
        result,
        Err(EngineError::InvalidReference {
            employee_id: 999,
            supervisor_id: 2,
        })
    );
    assert_eq!(engine.root(), &before);
}

#[rstest]
fn given_target_inside_own_subtree_when_moving_then_fails(mut engine: LogEngine) {
    let before = engine.root().clone();

    let result = engine.move_employee(5, 7);

    assert!(matches!(result, Err(EngineError::InvalidReference { .. })));
    assert_eq!(engine.root(), &before);
}

#[rstest]
fn given_two_moves_when_undoing_twice_then_both_are_reverted(mut engine: LogEngine) {
    let initial = engine.root().clone();

    engine.move_employee(7, 2).unwrap();
    engine.move_employee(15, 13).unwrap();
    engine.undo().unwrap();
    engine.undo().unwrap();

    assert_eq!(parent_map(engine.root()), parent_map(&initial));
}
