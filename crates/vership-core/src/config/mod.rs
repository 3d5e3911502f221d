//! Configuration schema for `vership.toml`.

mod store;

pub use store::ConfigStore;

use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the working directory.
pub const CONFIG_FILE: &str = "vership.toml";

/// Top-level configuration: the `[settings]` and `[deploy]` groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub deploy: DeployState,
}

/// Static deployment settings.
///
/// The core does not validate these; an empty project or repo surfaces
/// downstream as a fetch or path error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Project identifier, used in artifact and directory names.
    #[serde(default)]
    pub project: String,
    /// Repository base URL the artifacts are fetched from.
    #[serde(default)]
    pub repo: String,
}

/// Recorded deploy state.
///
/// Read/write support exists but the deploy flow does not consult these
/// fields; they are reserved for future rollback tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployState {
    #[serde(default)]
    pub at: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub old_version: String,
}
