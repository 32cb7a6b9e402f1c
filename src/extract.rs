use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::models::Book;
use crate::link;
use crate::text;

// Compiled once and reused across requests. The feed is semi-structured and not
// contractually stable, so extraction is tolerant: lazily matched item regions,
// and per-field lookups that yield an empty string when a tag is missing.
// Item delimiters are exact-case; only field tags match case-insensitively.
static ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<item>(.*?)</item>").expect("Failed to compile item pattern")
});
static TITLE_RE: Lazy<Regex> = Lazy::new(|| field_pattern("title"));
static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| field_pattern("author_name"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| field_pattern("link"));

fn field_pattern(tag: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{tag}>(.*?)</{tag}>"))
        .expect("Failed to compile field pattern")
}

/// First decoded value between `<tag>` and `</tag>` in the fragment, or an
/// empty string when the tag is absent.
fn tag_text(fragment: &str, re: &Regex) -> String {
    re.captures(fragment)
        .and_then(|c| c.get(1))
        .map(|m| text::decode(m.as_str()))
        .unwrap_or_default()
}

/// Parse a shelf RSS document into books, in document order. A document with no
/// items yields an empty list; records whose normalized title is empty are
/// dropped as unusable.
pub fn parse_feed(xml: &str) -> Vec<Book> {
    ITEM_RE
        .captures_iter(xml)
        .filter_map(|item| {
            let fragment = item.get(1).map_or("", |m| m.as_str());
            let title = text::strip_to_read_prefix(&tag_text(fragment, &TITLE_RE));
            if title.is_empty() {
                return None;
            }
            let author = tag_text(fragment, &AUTHOR_RE);
            let raw_link = tag_text(fragment, &LINK_RE);
            let link = link::canonicalize(&raw_link, &title, &author);
            Some(Book { title, author, link })
        })
        .collect()
}
