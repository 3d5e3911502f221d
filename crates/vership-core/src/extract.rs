//! Zip archive extraction with path sanitization.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

use crate::error::ExtractError;

/// Extract `archive` into `dest`, preserving recorded permission bits.
///
/// Entries are processed in archive order; the first failing entry aborts
/// the extraction and anything already written stays on disk. Entries whose
/// recorded path would escape `dest` are skipped.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<(), ExtractError> {
    let file = File::open(archive).map_err(|source| ExtractError::Open {
        path: archive.to_path_buf(),
        source,
    })?;
    let mut zip = ZipArchive::new(file).map_err(|source| ExtractError::Archive {
        path: archive.to_path_buf(),
        source,
    })?;

    fs::create_dir_all(dest).map_err(|source| ExtractError::CreateDir {
        path: dest.to_path_buf(),
        source,
    })?;

    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|source| ExtractError::Entry { index, source })?;

        let Some(relative) = entry.enclosed_name() else {
            tracing::warn!(name = entry.name(), "skipping archive entry with unsafe path");
            continue;
        };
        let outpath = dest.join(relative);
        let name = entry.name().to_string();

        if entry.is_dir() {
            fs::create_dir_all(&outpath).map_err(|source| ExtractError::CreateDir {
                path: outpath.clone(),
                source,
            })?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            let mut out = File::create(&outpath).map_err(|source| ExtractError::WriteEntry {
                name: name.clone(),
                path: outpath.clone(),
                source,
            })?;
            io::copy(&mut entry, &mut out).map_err(|source| ExtractError::WriteEntry {
                name: name.clone(),
                path: outpath.clone(),
                source,
            })?;
        }

        set_unix_mode(&outpath, entry.unix_mode());
    }

    Ok(())
}

#[cfg(unix)]
fn set_unix_mode(path: &Path, mode: Option<u32>) {
    use std::os::unix::fs::PermissionsExt;
    if let Some(mode) = mode {
        // Permission set failures are tolerated (e.g. foreign filesystems)
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(mode));
    }
}

#[cfg(not(unix))]
fn set_unix_mode(_path: &Path, _mode: Option<u32>) {}
