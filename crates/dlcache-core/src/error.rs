//! Error types surfaced by the downloader.
//!
//! Both kinds are fatal to a single `fetch_and_cache` call; nothing here is
//! retried or swallowed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The resource could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Curl reported an error (connection refused, DNS, timeout, too many redirects).
    #[error("GET request failed: {0}")]
    Transport(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}

/// Error returned by [`crate::Downloader::fetch_and_cache`].
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The cache file could not be created or written. A partially written
    /// file is left in place.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DownloadError::Io {
            path: path.into(),
            source,
        }
    }
}
