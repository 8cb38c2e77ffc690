//! The hierarchy-mutation and history engine.
//!
//! [`OrgEngine`] is the canonical engine: full-tree snapshots plus a cursor,
//! which gives multi-step undo and redo. [`log::LogEngine`] is the simpler
//! legacy variant kept for callers that only ever step backward.

pub mod diff;
pub mod log;

pub use log::LogEngine;

use tracing::{debug, instrument};

use crate::config::{OrderingPolicy, OrphanPolicy, Settings};
use crate::domain::{Employee, EngineError, EngineResult};

use diff::hierarchy_differences;

/// Snapshot-backed engine.
///
/// `history[cursor]` always equals the live tree, so undo/redo reduce to
/// moving the cursor and cloning the snapshot it lands on. A new move
/// truncates everything after the cursor (a fresh edit clears the redo
/// branch) before pushing the post-move state.
#[derive(Debug)]
pub struct OrgEngine {
    root: Employee,
    history: Vec<Employee>,
    cursor: usize,
    settings: Settings,
}

impl OrgEngine {
    pub fn new(root: Employee) -> Self {
        Self::with_settings(root, Settings::default())
    }

    pub fn with_settings(root: Employee, settings: Settings) -> Self {
        let initial = root.clone();
        Self {
            root,
            history: vec![initial],
            cursor: 0,
            settings,
        }
    }

    /// The current tree, for rendering.
    pub fn root(&self) -> &Employee {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Reparent `employee_id` under `supervisor_id`.
    ///
    /// All three lookups (employee, current supervisor, target supervisor)
    /// must succeed before anything is touched; on any failure the tree and
    /// the history are left unmodified.
    #[instrument(level = "debug", skip(self))]
    pub fn move_employee(&mut self, employee_id: u32, supervisor_id: u32) -> EngineResult<()> {
        check_preconditions(
            &self.root,
            employee_id,
            supervisor_id,
            self.settings.orphan_policy,
            self.settings.ordering_policy,
        )?;

        apply_move(
            &mut self.root,
            employee_id,
            supervisor_id,
            self.settings.orphan_policy,
        );

        self.history.truncate(self.cursor + 1);
        self.history.push(self.root.clone());
        self.cursor = self.history.len() - 1;
        debug!(cursor = self.cursor, snapshots = self.history.len(), "move recorded");
        Ok(())
    }

    /// Step back to the previous snapshot.
    ///
    /// Differences between the current and previous snapshot are replayed as
    /// inverse moves before the tree is replaced by a clone of the previous
    /// snapshot. The clone is authoritative; the replay mirrors the
    /// diff-driven restore but cannot repair misattributed differences.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> EngineResult<()> {
        if self.cursor == 0 {
            return Err(EngineError::NothingToUndo);
        }

        let differences = hierarchy_differences(
            &self.history[self.cursor],
            &self.history[self.cursor - 1],
            self.settings.diff_strategy,
        );
        debug!(count = differences.len(), "replaying inverse moves");
        for difference in &differences {
            // a difference attributed to the employee itself is degenerate;
            // no real supervisor change was recorded for it
            if difference.employee_id != difference.previous_supervisor_id {
                apply_move(
                    &mut self.root,
                    difference.employee_id,
                    difference.previous_supervisor_id,
                    self.settings.orphan_policy,
                );
            }
        }

        self.cursor -= 1;
        self.root = self.history[self.cursor].clone();
        Ok(())
    }

    /// Step forward again. Pure cursor advance plus tree replacement, the
    /// destination state was already snapshotted.
    #[instrument(level = "debug", skip(self))]
    pub fn redo(&mut self) -> EngineResult<()> {
        if self.cursor + 1 >= self.history.len() {
            return Err(EngineError::NothingToRedo);
        }
        self.cursor += 1;
        self.root = self.history[self.cursor].clone();
        Ok(())
    }
}

/// Validate a move without touching the tree.
fn check_preconditions(
    root: &Employee,
    employee_id: u32,
    supervisor_id: u32,
    orphan_policy: OrphanPolicy,
    ordering_policy: OrderingPolicy,
) -> EngineResult<()> {
    let invalid = || EngineError::InvalidReference {
        employee_id,
        supervisor_id,
    };

    let employee = root.find(employee_id).ok_or_else(invalid)?;
    root.find_supervisor(employee_id).ok_or_else(invalid)?;
    root.find(supervisor_id).ok_or_else(invalid)?;

    // A target inside the part of the tree that detaches during the edit
    // would be unreachable when the employee is reattached, losing nodes.
    match orphan_policy {
        OrphanPolicy::ReassignToOldSupervisor if employee_id == supervisor_id => {
            return Err(invalid());
        }
        OrphanPolicy::FollowManager if employee.find(supervisor_id).is_some() => {
            return Err(invalid());
        }
        _ => {}
    }

    if ordering_policy == OrderingPolicy::SupervisorIdLower && supervisor_id >= employee_id {
        return Err(EngineError::OrderingViolation {
            employee_id,
            supervisor_id,
        });
    }

    Ok(())
}

/// The structural edit: detach the employee from its supervisor's children
/// (preserving sibling order) and append it to the new supervisor's children.
///
/// With [`OrphanPolicy::ReassignToOldSupervisor`] the employee's own reports
/// are appended to the old supervisor first and the employee arrives empty.
/// Callers have validated the ids; an unresolvable id here is a no-op.
pub(crate) fn apply_move(
    root: &mut Employee,
    employee_id: u32,
    new_supervisor_id: u32,
    policy: OrphanPolicy,
) {
    let Some(old_supervisor) = root.find_supervisor_mut(employee_id) else {
        return;
    };
    let Some(position) = old_supervisor
        .children
        .iter()
        .position(|child| child.id == employee_id)
    else {
        return;
    };

    let mut employee = old_supervisor.children.remove(position);
    if policy == OrphanPolicy::ReassignToOldSupervisor {
        old_supervisor.children.append(&mut employee.children);
    }

    if let Some(new_supervisor) = root.find_mut(new_supervisor_id) {
        new_supervisor.children.push(employee);
    }
}
