pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod fetch;
pub mod url_model;

pub use downloader::{fetch_and_cache, Downloader};
pub use error::{DownloadError, FetchError};
