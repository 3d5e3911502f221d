//! Config store for loading and saving vership.toml.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::{CONFIG_FILE, Config};

/// Owns the location of `vership.toml` under a working directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    pub fn new(root: &Path) -> Self {
        Self {
            config_path: root.join(CONFIG_FILE),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration. A missing file is an error: without a
    /// project and repo there is nothing to deploy.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::Missing(self.config_path.clone()));
        }
        let content =
            std::fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Read {
                path: self.config_path.clone(),
                source,
            })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
        std::fs::write(&self.config_path, content).map_err(|source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        })
    }
}
