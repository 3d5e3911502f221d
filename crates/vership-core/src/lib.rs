//! Vership Core Library
//!
//! Provides the domain logic for deploying versioned release artifacts:
//! locating an artifact in a remote repository, fetching it, materializing
//! it into a versioned directory, and switching the `current` pointer.

pub mod activate;
pub mod config;
pub mod deploy;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod locate;
pub mod lock;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{Config, ConfigStore, DeployState, Settings};

    // Pipeline
    pub use crate::deploy::{DeployEvent, DeployOutcome, Deployer};
    pub use crate::locate::ReleaseLocation;

    // Errors
    pub use crate::error::{
        ActivateError, ConfigError, DeployError, ExtractError, FetchError, LockError,
    };
}
