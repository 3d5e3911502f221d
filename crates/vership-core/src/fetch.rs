//! Artifact download over HTTP.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::FetchError;

/// Download `url` into the file at `dest`, streaming the response body.
///
/// The destination is created (or truncated) before the request is issued;
/// a failed transfer leaves the partial file on disk. Non-success HTTP
/// statuses are rejected so an error body never lands in the archive slot.
pub fn fetch_artifact(dest: &Path, url: &str) -> Result<(), FetchError> {
    let mut out = File::create(dest).map_err(|source| FetchError::Create {
        path: dest.to_path_buf(),
        source,
    })?;

    let mut response = reqwest::blocking::get(url).map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = io::copy(&mut response, &mut out).map_err(|source| FetchError::Stream {
        path: dest.to_path_buf(),
        url: url.to_string(),
        source,
    })?;
    tracing::debug!(url, bytes, "download complete");

    Ok(())
}
