//! Page and payload fetching.
//!
//! Two engines share one contract: body bytes for a URL, or a typed error on
//! transport failure or non-2xx status. The sequential engine blocks on one
//! Easy handle per request; the concurrent engine drives a bounded batch of
//! transfers through a curl multi handle on the current thread.

mod batch;

use std::time::Duration;

use crate::config::{FetchBackend, TfdConfig};
use crate::error::{Result, TfdError};

/// Redirect ceiling for every transfer.
const MAX_REDIRECTS: u32 = 10;

/// Transfer knobs shared by both engines.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Connect timeout per request.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Transfers in flight at once on the concurrent engine.
    pub max_in_flight: usize,
}

impl FetchOptions {
    pub fn from_config(cfg: &TfdConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            max_in_flight: cfg.max_in_flight.max(1),
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&TfdConfig::default())
    }
}

/// Fetches one URL with a blocking Easy handle and returns the body bytes.
pub fn fetch_bytes(url: &str, options: &FetchOptions) -> Result<Vec<u8>> {
    let net = |e: curl::Error| TfdError::Network {
        url: url.to_string(),
        source: e,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(net)?;
    easy.follow_location(true).map_err(net)?;
    easy.max_redirections(MAX_REDIRECTS).map_err(net)?;
    easy.connect_timeout(options.connect_timeout).map_err(net)?;
    easy.timeout(options.request_timeout).map_err(net)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(net)?;
        transfer.perform().map_err(net)?;
    }

    let code = easy.response_code().map_err(net)?;
    if !(200..300).contains(&code) {
        return Err(TfdError::Status {
            url: url.to_string(),
            code,
        });
    }
    Ok(body)
}

/// Fetches one URL and decodes the body as text (lossily; the extractors
/// only rely on markup structure).
pub fn fetch_text(url: &str, options: &FetchOptions) -> Result<String> {
    let body = fetch_bytes(url, options)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Fetches a batch of URLs, one result slot per request index.
///
/// Per-URL failures land in their own slot so callers can apply skip
/// policies; only a breakage of the engine itself fails the whole batch.
/// Slot order always matches `urls`, whatever the completion order.
pub fn fetch_many(
    urls: &[String],
    backend: FetchBackend,
    options: &FetchOptions,
) -> Result<Vec<Result<Vec<u8>>>> {
    match backend {
        FetchBackend::Sequential => {
            Ok(urls.iter().map(|url| fetch_bytes(url, options)).collect())
        }
        FetchBackend::Concurrent => batch::fetch_batch(urls, options),
    }
}
