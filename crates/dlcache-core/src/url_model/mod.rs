//! URL modeling and filename derivation.
//!
//! The local name of a cached download is the last segment of the URL path,
//! taken verbatim (no percent-decoding), or [`FALLBACK_FILENAME`] when that
//! segment is empty.

mod path;

pub use path::last_path_segment;

/// Filename used when the URL path ends in `/` or has no segment at all.
pub const FALLBACK_FILENAME: &str = "downloaded";

/// Derives the local filename for `url`.
///
/// Fails only if `url` cannot be parsed; nothing else about its form is checked.
///
/// # Examples
///
/// - `derive_filename("https://example.com/data.csv")` → `"data.csv"`
/// - `derive_filename("https://example.com/")` → `"downloaded"`
pub fn derive_filename(url: &str) -> Result<String, url::ParseError> {
    let parsed = url::Url::parse(url)?;
    Ok(match last_path_segment(&parsed) {
        Some(segment) => segment.to_string(),
        None => FALLBACK_FILENAME.to_string(),
    })
}
