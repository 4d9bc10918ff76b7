//! Filename extraction from URL path.

use url::Url;

/// Returns the final segment of the URL path, or `None` if it is empty.
///
/// Unlike a "last non-empty segment" lookup, a trailing `/` counts: for
/// `https://example.com/dir/` the final segment is empty.
pub fn last_path_segment(url: &Url) -> Option<&str> {
    let segment = url.path().rsplit('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(url: &str) -> Option<String> {
        let parsed = Url::parse(url).unwrap();
        last_path_segment(&parsed).map(str::to_string)
    }

    #[test]
    fn normal() {
        assert_eq!(seg("https://example.com/a/b/file.deb").as_deref(), Some("file.deb"));
        assert_eq!(seg("https://example.com/single").as_deref(), Some("single"));
    }

    #[test]
    fn root_or_trailing_slash() {
        assert_eq!(seg("https://example.com/"), None);
        assert_eq!(seg("https://example.com"), None);
        assert_eq!(seg("https://example.com/a/b/"), None);
    }

    #[test]
    fn percent_encoding_is_kept() {
        assert_eq!(
            seg("https://example.com/my%20file.txt").as_deref(),
            Some("my%20file.txt")
        );
    }
}
