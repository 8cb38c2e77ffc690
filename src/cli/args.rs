//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Org hierarchy manager: reparent employees with multi-step undo/redo
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file overriding the global configuration
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the hierarchy of a roster
    Show {
        /// Roster TOML file (built-in sample when omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,

        /// Print the flat indented listing instead of the tree
        #[arg(short, long)]
        flat: bool,
    },

    /// Interactive session: move employees around, undo, redo
    Shell {
        /// Roster TOML file (built-in sample when omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
