use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::params::ShelfRequest;

/// Sent on every upstream request so the feed host can identify the client.
pub const USER_AGENT: &str = "goodreads-random-picker";

// One client for the process, reusing connections across requests.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Build the shelf RSS URL for a validated request.
pub fn feed_url(base: &str, req: &ShelfRequest) -> String {
    format!(
        "{}/review/list_rss/{}?shelf={}&per_page={}&page={}",
        base.trim_end_matches('/'),
        urlencoding::encode(&req.user_id),
        urlencoding::encode(&req.shelf),
        req.per_page,
        req.page,
    )
}

/// Fetch the shelf feed: exactly one GET, no retry. A non-success status is
/// mirrored back as `Upstream`; a body over `max_bytes` is rejected before any
/// extraction runs.
pub async fn fetch_feed(base: &str, req: &ShelfRequest, max_bytes: usize) -> Result<String> {
    let url = feed_url(base, req);
    tracing::debug!(%url, "fetching shelf feed");

    let response = CLIENT.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream { status: status.as_u16() });
    }

    // Cheap pre-check when the upstream declares a length; the decoded body is
    // checked again below since the header is not authoritative.
    if let Some(len) = response.content_length() {
        if len > max_bytes as u64 {
            return Err(AppError::ResponseTooLarge);
        }
    }

    let body = response.text().await?;
    if body.len() > max_bytes {
        return Err(AppError::ResponseTooLarge);
    }

    Ok(body)
}
