//! orgtree: an in-memory organizational hierarchy with undo/redo.
//!
//! The engine owns one employee tree and supports reparenting via
//! [`OrgEngine::move_employee`], with snapshot-based history enabling
//! multi-step [`OrgEngine::undo`] and [`OrgEngine::redo`]. A thin CLI
//! renders the tree and drives the engine interactively.

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod exitcode;
pub mod render;
pub mod roster;
pub mod util;

pub use config::{DiffStrategy, OrderingPolicy, OrphanPolicy, Settings};
pub use domain::{Employee, EngineError, EngineResult};
pub use engine::{LogEngine, OrgEngine};
