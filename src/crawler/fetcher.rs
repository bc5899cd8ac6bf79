//! HTTP fetching for the crawler
//!
//! Builds the shared HTTP client and provides the fetch helper used by the
//! page transformer and the seed-title fetch. Transport failures and
//! non-success statuses are both surfaced as errors; callers decide
//! whether an error is fatal (seed fetch) or a per-page skip (everything
//! else).

use crate::MirrorError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client shared by all workers of a crawl
///
/// Redirects are followed (documentation sites lean on them heavily), and
/// compressed responses are transparently decoded.
///
/// # Arguments
///
/// * `timeout_secs` - Per-request timeout in seconds
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("docmirror/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body text
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(MirrorError::Status)` - The server answered with a non-success status
/// * `Err(MirrorError::Http)` - Transport failure (DNS, connect, timeout, body read)
pub async fn fetch_text(client: &Client, url: &Url) -> Result<String, MirrorError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| MirrorError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MirrorError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| MirrorError::Http {
        url: url.to_string(),
        source,
    })
}
