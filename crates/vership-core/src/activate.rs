//! Atomic switch of the `current` symlink.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ActivateError;

/// Name of the activation pointer inside the working directory.
pub const CURRENT_LINK: &str = "current";

/// Point `root/current` at the release directory named `dir_name`.
///
/// The new link is created under a temporary name and renamed over
/// `current`, so readers never observe a missing pointer. The link target
/// is the relative directory name, keeping the tree relocatable.
/// Re-activating the current target succeeds.
pub fn activate(root: &Path, dir_name: &str) -> Result<(), ActivateError> {
    let current = root.join(CURRENT_LINK);
    let tmp = temp_link_path(root);
    if tmp.exists() {
        // leftover from a crashed deploy
        let _ = fs::remove_file(&tmp);
    }

    if let Err(source) = create_dir_symlink(Path::new(dir_name), &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(ActivateError::Link {
            target: dir_name.to_string(),
            source,
        });
    }

    // rename() can replace another link or file, but not a real directory
    if let Ok(meta) = fs::symlink_metadata(&current)
        && meta.is_dir()
        && let Err(source) = fs::remove_dir_all(&current)
    {
        let _ = fs::remove_file(&tmp);
        return Err(ActivateError::Remove {
            path: current,
            source,
        });
    }

    if let Err(source) = fs::rename(&tmp, &current) {
        let _ = fs::remove_file(&tmp);
        return Err(ActivateError::Replace {
            path: current,
            source,
        });
    }

    tracing::debug!(target = dir_name, "activation pointer switched");
    Ok(())
}

fn temp_link_path(root: &Path) -> PathBuf {
    root.join(format!(".{}.tmp.{}", CURRENT_LINK, std::process::id()))
}

#[cfg(unix)]
fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(not(any(unix, windows)))]
fn create_dir_symlink(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "Symlinks are not supported on this platform",
    ))
}
