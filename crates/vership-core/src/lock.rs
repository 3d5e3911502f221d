//! Advisory deploy lock scoped to the working directory.
//!
//! The working directory is otherwise unguarded shared state; two deploys
//! racing on it can interleave fetch, extraction and the pointer switch.
//! The lock is a pid file created with `create_new`: held by a live process
//! it fails fast, a stale holder is cleared and acquisition retried once.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LockError;

/// Name of the lock file inside the working directory.
pub const LOCK_FILE: &str = ".vership.lock";

/// Exclusive lock held for the duration of one deploy.
///
/// Dropping the guard removes the lock file.
#[derive(Debug)]
pub struct DeployLock {
    path: PathBuf,
}

impl Drop for DeployLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[derive(Debug)]
enum LockState {
    HeldBy(u32),
    Stale,
    Io(std::io::Error),
}

impl DeployLock {
    pub fn acquire(root: &Path) -> Result<Self, LockError> {
        let path = root.join(LOCK_FILE);

        match try_acquire(&path) {
            Ok(lock) => Ok(lock),
            Err(LockState::Stale) => {
                let _ = std::fs::remove_file(&path);
                match try_acquire(&path) {
                    Ok(lock) => Ok(lock),
                    Err(LockState::HeldBy(pid)) => Err(LockError::Held { pid, path }),
                    Err(LockState::Stale) => Err(LockError::Held { pid: 0, path }),
                    Err(LockState::Io(source)) => Err(LockError::Create { path, source }),
                }
            }
            Err(LockState::HeldBy(pid)) => Err(LockError::Held { pid, path }),
            Err(LockState::Io(source)) => Err(LockError::Create { path, source }),
        }
    }
}

fn try_acquire(path: &Path) -> Result<DeployLock, LockState> {
    match OpenOptions::new().create_new(true).write(true).open(path) {
        Ok(mut file) => {
            let pid = std::process::id();
            let _ = writeln!(file, "{pid}");
            Ok(DeployLock {
                path: path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let Ok(contents) = std::fs::read_to_string(path) else {
                return Err(LockState::Stale);
            };
            match contents.trim().parse::<u32>() {
                Ok(pid) if is_process_running(pid) => Err(LockState::HeldBy(pid)),
                // dead holder or garbage contents
                _ => Err(LockState::Stale),
            }
        }
        Err(err) => Err(LockState::Io(err)),
    }
}

#[cfg(unix)]
fn is_process_running(pid: u32) -> bool {
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_process_running(_pid: u32) -> bool {
    // No cheap liveness probe; treat the lock as held.
    true
}
