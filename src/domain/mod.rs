//! Domain layer: the employee tree and engine errors

pub mod entities;
pub mod error;

pub use entities::Employee;
pub use error::{EngineError, EngineResult};
