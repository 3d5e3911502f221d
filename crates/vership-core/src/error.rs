//! Error taxonomy for the deploy pipeline.
//!
//! Each pipeline component reports its own error enum; [`DeployError`]
//! aggregates them so callers can match on the failing stage (the CLI maps
//! each stage to a distinct exit code).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or saving `vership.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[source] toml::ser::Error),

    #[error("failed to write config file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures downloading a release artifact.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to write {path} while downloading {url}")]
    Stream {
        path: PathBuf,
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Failures extracting a release archive.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open archive {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a readable zip archive")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read archive entry #{index}")]
    Entry {
        index: usize,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to write {path} from archive entry {name}")]
    WriteEntry {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures switching the `current` symlink.
#[derive(Debug, Error)]
pub enum ActivateError {
    #[error("failed to create symlink to {target}")]
    Link {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove existing {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to replace {path}")]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures acquiring the working-directory deploy lock.
#[derive(Debug, Error)]
pub enum LockError {
    #[error("another deploy is already running (pid {pid}); remove {path} if that process is gone")]
    Held { pid: u32, path: PathBuf },

    #[error("failed to create lock file {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any failure of the deploy pipeline, tagged by stage.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("version must be at least 1 (got {0})")]
    InvalidVersion(u32),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Activate(#[from] ActivateError),
}
