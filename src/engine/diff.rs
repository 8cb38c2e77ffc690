//! Snapshot difference helper for the undo replay.

use std::collections::HashMap;

use tracing::instrument;

use crate::config::DiffStrategy;
use crate::domain::Employee;

/// One employee whose supervisor changed between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difference {
    pub employee_id: u32,
    /// Supervisor to move the employee back under. Falls back to the
    /// employee's own id when no ancestor change was recorded on the path,
    /// which marks the difference as degenerate.
    pub previous_supervisor_id: u32,
}

/// Compute the per-employee differences between `current` and `previous`.
#[instrument(level = "trace", skip(current, previous))]
pub fn hierarchy_differences(
    current: &Employee,
    previous: &Employee,
    strategy: DiffStrategy,
) -> Vec<Difference> {
    match strategy {
        DiffStrategy::Positional => {
            let mut differences = Vec::new();
            positional(current, previous, None, &mut differences);
            differences
        }
        DiffStrategy::IdKeyed => id_keyed(current, previous),
    }
}

/// Lock-step pre-order walk by child position.
///
/// A node is flagged when the paired ids differ, the children counts differ,
/// or an ancestor on this path was already flagged (the flag travels down as
/// the previous parent's id). Positional pairing is only meaningful while
/// both children lists are structurally aligned; extra children on either
/// side have no counterpart and are skipped.
fn positional(
    current: &Employee,
    previous: &Employee,
    flagged_ancestor: Option<u32>,
    differences: &mut Vec<Difference>,
) {
    let changed = current.id != previous.id
        || current.children.len() != previous.children.len()
        || flagged_ancestor.is_some();

    if changed {
        differences.push(Difference {
            employee_id: current.id,
            previous_supervisor_id: flagged_ancestor.unwrap_or(current.id),
        });
    }

    let child_flag = if changed { Some(previous.id) } else { None };
    for (current_child, previous_child) in current.children.iter().zip(previous.children.iter()) {
        positional(current_child, previous_child, child_flag, differences);
    }
}

/// Compare supervisor assignments by id instead of position: an employee
/// whose parent id changed yields exactly one difference keyed by the
/// previous parent. Immune to sibling reordering.
fn id_keyed(current: &Employee, previous: &Employee) -> Vec<Difference> {
    let mut current_parents = HashMap::new();
    collect_parents(current, &mut current_parents);
    let mut previous_parents = HashMap::new();
    collect_parents(previous, &mut previous_parents);

    let mut differences: Vec<Difference> = current_parents
        .iter()
        .filter_map(|(&id, &current_parent)| match previous_parents.get(&id) {
            Some(&previous_parent) if previous_parent != current_parent => Some(Difference {
                employee_id: id,
                previous_supervisor_id: previous_parent,
            }),
            _ => None,
        })
        .collect();
    differences.sort_by_key(|difference| difference.employee_id);
    differences
}

fn collect_parents(node: &Employee, parents: &mut HashMap<u32, u32>) {
    for child in &node.children {
        parents.insert(child.id, node.id);
        collect_parents(child, parents);
    }
}
