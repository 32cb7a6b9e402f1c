use reqwest::Url;

/// Hosts must end with this suffix to be emitted as-is.
pub const TRUSTED_DOMAIN_SUFFIX: &str = ".goodreads.com";

/// Search path used when the feed link cannot be trusted.
pub const SEARCH_BASE: &str = "https://www.goodreads.com/search";

/// Normalize a feed link into a clean HTTPS Goodreads URL. A missing, malformed,
/// or off-domain link becomes a deterministic Goodreads search URL built from
/// the book's title and author.
pub fn canonicalize(raw: &str, title: &str, author: &str) -> String {
    let query = format!("{} {}", title, author);
    let fallback = format!("{}?q={}", SEARCH_BASE, urlencoding::encode(query.trim()));

    let s = raw.trim();
    if s.is_empty() {
        return fallback;
    }

    // Force https; Goodreads serves everything over TLS.
    let s = if s.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://")) {
        format!("https://{}", &s[7..])
    } else {
        s.to_string()
    };

    let parsed = match Url::parse(&s) {
        Ok(u) => u,
        Err(_) => return fallback,
    };

    match parsed.host_str() {
        Some(host) if host.to_ascii_lowercase().ends_with(TRUSTED_DOMAIN_SUFFIX) => s,
        _ => fallback,
    }
}
