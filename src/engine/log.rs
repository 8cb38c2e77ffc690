//! Action-log history: the simpler legacy engine variant.
//!
//! Stores one invertible record per move. Undo steps backward one move at a
//! time by applying the exact structural inverse; redo is not supported
//! because forward information is discarded once undone.

use tracing::instrument;

use crate::config::OrphanPolicy;
use crate::domain::{Employee, EngineError, EngineResult};
use crate::engine::apply_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveRecord {
    employee_id: u32,
    from_supervisor_id: u32,
    to_supervisor_id: u32,
}

#[derive(Debug)]
pub struct LogEngine {
    root: Employee,
    history: Vec<MoveRecord>,
}

impl LogEngine {
    pub fn new(root: Employee) -> Self {
        Self {
            root,
            history: Vec::new(),
        }
    }

    pub fn root(&self) -> &Employee {
        &self.root
    }

    /// Reparent `employee_id` under `supervisor_id`, subtree and all.
    #[instrument(level = "debug", skip(self))]
    pub fn move_employee(&mut self, employee_id: u32, supervisor_id: u32) -> EngineResult<()> {
        let invalid = || EngineError::InvalidReference {
            employee_id,
            supervisor_id,
        };

        let employee = self.root.find(employee_id).ok_or_else(invalid)?;
        // the subtree moves wholesale; a target inside it would detach from the root
        if employee.find(supervisor_id).is_some() {
            return Err(invalid());
        }
        let from_supervisor_id = self.root.find_supervisor(employee_id).ok_or_else(invalid)?.id;
        self.root.find(supervisor_id).ok_or_else(invalid)?;

        self.history.push(MoveRecord {
            employee_id,
            from_supervisor_id,
            to_supervisor_id: supervisor_id,
        });
        apply_move(
            &mut self.root,
            employee_id,
            supervisor_id,
            OrphanPolicy::FollowManager,
        );
        Ok(())
    }

    /// Pop the latest record and apply its exact structural inverse,
    /// independent of the tree's current shape elsewhere.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> EngineResult<()> {
        let record = self.history.pop().ok_or(EngineError::NothingToUndo)?;
        apply_move(
            &mut self.root,
            record.employee_id,
            record.from_supervisor_id,
            OrphanPolicy::FollowManager,
        );
        Ok(())
    }

    /// Intentional asymmetry: the log only holds enough to go backward.
    pub fn redo(&mut self) -> EngineResult<()> {
        Err(EngineError::RedoUnsupported)
    }
}
