//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ORGTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// What happens to a relocated manager's direct reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Reports stay with the old chain of command: they are reattached as
    /// siblings under the old supervisor and the moved employee arrives at
    /// the new supervisor without reports.
    #[default]
    ReassignToOldSupervisor,
    /// The whole subtree follows the manager.
    FollowManager,
}

/// Optional numeric constraint between supervisor and employee ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    #[default]
    None,
    /// Reject a move unless the supervisor id is lower than the employee id.
    SupervisorIdLower,
}

/// How undo derives per-employee differences between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffStrategy {
    /// Lock-step walk by child position. Fragile once sibling order has
    /// changed between the snapshots.
    #[default]
    Positional,
    /// Compare the set of child ids per supervisor. Robust to reordering.
    IdKeyed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub orphan_policy: OrphanPolicy,
    pub ordering_policy: OrderingPolicy,
    pub diff_strategy: DiffStrategy,
    /// Spaces per depth level in the flat listing
    pub indent_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orphan_policy: OrphanPolicy::default(),
            ordering_policy: OrderingPolicy::default(),
            diff_strategy: DiffStrategy::default(),
            indent_width: 2,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence. Missing files are fine except
    /// an explicitly requested one.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("ORGTREE"));

        builder.build()?.try_deserialize()
    }

    fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().join("orgtree.toml"))
    }
}
