//! CLI-level errors (wraps engine and roster errors)

use thiserror::Error;

use crate::domain::EngineError;
use crate::roster::RosterError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => crate::exitcode::USAGE,
            CliError::Roster(RosterError::FileRead(_)) => crate::exitcode::NOINPUT,
            CliError::Roster(_) => crate::exitcode::DATAERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}
