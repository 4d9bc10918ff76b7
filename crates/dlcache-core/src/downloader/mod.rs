//! Fetch-once cache keyed by derived filename.
//!
//! A URL maps to `<dir>/<derived filename>`. If that path already exists it is
//! returned as-is without touching the network; otherwise the body is fetched
//! with a single blocking GET and written to a newly created file.
//!
//! The existence check and the create are not atomic. Two callers racing on
//! the same name both fetch; the loser's create fails with `AlreadyExists`.

use crate::config::FetchConfig;
use crate::error::{DownloadError, FetchError};
use crate::fetch;
use crate::url_model::derive_filename;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Downloads URLs into a target directory, skipping any whose derived
/// filename is already present there.
#[derive(Debug, Clone)]
pub struct Downloader {
    dir: PathBuf,
    config: FetchConfig,
}

impl Downloader {
    pub fn new(dir: impl Into<PathBuf>, config: FetchConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    /// Downloader whose target directory is the process's current working
    /// directory, resolved at each call.
    pub fn in_current_dir(config: FetchConfig) -> Self {
        Self::new(PathBuf::new(), config)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Path `url` is (or would be) cached at. No I/O.
    pub fn cached_path(&self, url: &str) -> Result<PathBuf, FetchError> {
        let filename = filename_for(url)?;
        Ok(self.dir.join(filename))
    }

    /// Returns the derived filename for `url`, downloading the resource first
    /// if no file by that name exists in the target directory.
    ///
    /// At most one GET and one file write happen per call. An existing file is
    /// trusted without verification, whatever its content.
    pub fn fetch_and_cache(&self, url: &str) -> Result<String, DownloadError> {
        let filename = filename_for(url)?;
        let path = self.dir.join(&filename);

        if path.exists() {
            tracing::debug!(url, path = %path.display(), "cache hit, skipping download");
            return Ok(filename);
        }

        tracing::info!(url, path = %path.display(), "downloading");
        let body = fetch::get_bytes(url, &self.config)?;
        write_new_file(&path, &body)?;
        tracing::info!(path = %path.display(), bytes = body.len(), "cached");

        Ok(filename)
    }
}

/// Downloads `url` into the current working directory with default settings.
/// See [`Downloader::fetch_and_cache`].
pub fn fetch_and_cache(url: &str) -> Result<String, DownloadError> {
    Downloader::in_current_dir(FetchConfig::default()).fetch_and_cache(url)
}

fn filename_for(url: &str) -> Result<String, FetchError> {
    derive_filename(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Creates `path` (failing if it exists) and writes `bytes` to it.
/// A failed write leaves whatever was written so far.
fn write_new_file(path: &Path, bytes: &[u8]) -> Result<(), DownloadError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| DownloadError::io(path, e))?;
    file.write_all(bytes).map_err(|e| DownloadError::io(path, e))?;
    file.flush().map_err(|e| DownloadError::io(path, e))?;
    Ok(())
}
