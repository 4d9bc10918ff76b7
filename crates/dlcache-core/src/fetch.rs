//! Blocking HTTP GET.
//!
//! Uses the curl crate (libcurl easy interface) and buffers the entire
//! response body in memory. Redirects are followed the way libcurl does it,
//! bounded by `max_redirects`.

use crate::config::FetchConfig;
use crate::error::FetchError;
use std::time::Duration;

/// Performs a GET against `url` and returns the response body bytes unchanged.
///
/// A non-2xx final status is an error even though the transfer itself
/// succeeded. Runs in the current thread.
pub fn get_bytes(url: &str, cfg: &FetchConfig) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(cfg.max_redirects)?;
    if let Some(ua) = cfg.user_agent.as_deref() {
        easy.useragent(ua)?;
    }
    if let Some(secs) = cfg.connect_timeout_secs {
        easy.connect_timeout(Duration::from_secs(secs))?;
    }
    if let Some(secs) = cfg.timeout_secs {
        easy.timeout(Duration::from_secs(secs))?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!(url, status, bytes = body.len(), "GET complete");
    Ok(body)
}
