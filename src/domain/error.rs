//! Domain-level errors (no infrastructure dependencies)

use thiserror::Error;

/// Engine errors are always recoverable: every operation validates fully
/// before mutating, so a returned error means "state unchanged".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid employee or supervisor id (employee {employee_id}, supervisor {supervisor_id})")]
    InvalidReference { employee_id: u32, supervisor_id: u32 },

    #[error("no actions to undo")]
    NothingToUndo,

    #[error("no actions to redo")]
    NothingToRedo,

    #[error("redo is not supported by the action-log history")]
    RedoUnsupported,

    #[error("supervisor id {supervisor_id} must be lower than employee id {employee_id}")]
    OrderingViolation { employee_id: u32, supervisor_id: u32 },
}

pub type EngineResult<T> = Result<T, EngineError>;
