use once_cell::sync::Lazy;
use regex::Regex;

// Goodreads prefixes the shelf name onto the title field of the feed.
static TO_READ_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*to-read:\s*").expect("Failed to compile title prefix pattern")
});

/// Decode raw tag content: strip CDATA wrappers, unescape the five standard
/// markup entities, trim. CDATA markers must go first so literal CDATA-looking
/// text inside an entity-escaped field is not corrupted.
pub fn decode(s: &str) -> String {
    s.replace("<![CDATA[", "")
        .replace("]]>", "")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

/// Remove a leading case-insensitive `to-read:` label from a decoded title.
pub fn strip_to_read_prefix(s: &str) -> String {
    TO_READ_PREFIX_RE.replace(s, "").trim().to_string()
}
