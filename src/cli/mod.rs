//! Command-line interface layer

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
