//! Deployment orchestration: locate, fetch, extract, activate.

use std::path::{Path, PathBuf};

use crate::activate::activate;
use crate::config::Settings;
use crate::error::DeployError;
use crate::extract::extract_archive;
use crate::fetch::fetch_artifact;
use crate::locate::ReleaseLocation;
use crate::lock::DeployLock;

/// Progress notification emitted before each long-running step, so an
/// operator watching a hung deploy can see where it is stuck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// The release directory already exists; fetch and extraction skipped.
    AlreadyPresent { dir_name: String },
    Downloading { url: String },
    Downloaded,
    Extracting { archive_name: String },
    Activating { dir_name: String },
}

/// What a successful deploy did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub version: u32,
    pub dir_name: String,
    /// False when the release directory was already present.
    pub fetched: bool,
}

/// Runs the deploy pipeline against an explicit working directory.
///
/// Every step is synchronous and blocking; within one invocation fetch
/// completes before extraction, and extraction before activation.
#[derive(Debug, Clone)]
pub struct Deployer {
    root: PathBuf,
    settings: Settings,
}

impl Deployer {
    pub fn new(root: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Deploy `version`, discarding progress events.
    pub fn deploy(&self, version: u32) -> Result<DeployOutcome, DeployError> {
        self.deploy_with_progress(version, &mut |_| {})
    }

    /// Deploy `version`, reporting progress through `progress`.
    ///
    /// Fails before any side effect when `version` is zero. A failure
    /// after the release directory is materialized leaves it in place,
    /// so a retry only repeats the activation step.
    pub fn deploy_with_progress(
        &self,
        version: u32,
        progress: &mut dyn FnMut(&DeployEvent),
    ) -> Result<DeployOutcome, DeployError> {
        if version < 1 {
            return Err(DeployError::InvalidVersion(version));
        }

        let _lock = DeployLock::acquire(&self.root)?;

        let location = ReleaseLocation::new(&self.settings, version);
        let dir_path = location.dir_path(&self.root);

        let fetched = if dir_path.exists() {
            tracing::debug!(dir = %dir_path.display(), "release directory already present");
            progress(&DeployEvent::AlreadyPresent {
                dir_name: location.dir_name.clone(),
            });
            false
        } else {
            let archive_path = location.archive_path(&self.root);

            progress(&DeployEvent::Downloading {
                url: location.remote_url.clone(),
            });
            fetch_artifact(&archive_path, &location.remote_url)?;
            progress(&DeployEvent::Downloaded);

            progress(&DeployEvent::Extracting {
                archive_name: location.archive_name.clone(),
            });
            extract_archive(&archive_path, &dir_path)?;
            true
        };

        progress(&DeployEvent::Activating {
            dir_name: location.dir_name.clone(),
        });
        activate(&self.root, &location.dir_name)?;

        tracing::info!(version, dir = %location.dir_name, fetched, "deploy complete");
        Ok(DeployOutcome {
            version,
            dir_name: location.dir_name,
            fetched,
        })
    }
}
