//! Canonical naming for release artifacts and directories.

use std::path::{Path, PathBuf};

use crate::config::Settings;

/// Where one version of a release lives, locally and remotely.
///
/// Pure string computation from the settings and the requested version;
/// the repo base is concatenated as-is, not parsed as a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLocation {
    pub version: u32,
    /// Local archive filename, `{project}-{version}.zip`.
    pub archive_name: String,
    /// Release directory name, `{project}-{version}`.
    pub dir_name: String,
    /// Remote fetch address, `{repo}/{project}/{archive_name}`.
    pub remote_url: String,
}

impl ReleaseLocation {
    pub fn new(settings: &Settings, version: u32) -> Self {
        let dir_name = format!("{}-{}", settings.project, version);
        let archive_name = format!("{dir_name}.zip");
        let remote_url = format!("{}/{}/{}", settings.repo, settings.project, archive_name);
        Self {
            version,
            archive_name,
            dir_name,
            remote_url,
        }
    }

    pub fn archive_path(&self, root: &Path) -> PathBuf {
        root.join(&self.archive_name)
    }

    pub fn dir_path(&self, root: &Path) -> PathBuf {
        root.join(&self.dir_name)
    }
}
