use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::models::ShelfQuery;
use crate::error::{AppError, Result};

pub const DEFAULT_SHELF: &str = "to-read";
pub const MIN_PER_PAGE: i64 = 1;
pub const MAX_PER_PAGE: i64 = 200;
pub const MIN_PAGE: i64 = 1;
pub const MAX_PAGE: i64 = 5;

// Only numeric Goodreads IDs; keeps the constructed upstream URL free of
// anything injectable.
static USER_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,20}$").expect("Failed to compile user id pattern")
});

/// A validated, bounded shelf request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfRequest {
    pub user_id: String,
    pub shelf: String,
    pub per_page: u32,
    pub page: u32,
}

/// Sanitize raw query parameters into a `ShelfRequest`. Pure function of its
/// input; the only failure is a malformed user id.
pub fn validate(query: &ShelfQuery) -> Result<ShelfRequest> {
    let user_id = query.user_id.as_deref().unwrap_or("").trim();
    if !USER_ID_RE.is_match(user_id) {
        return Err(AppError::InvalidUserId);
    }

    let shelf = query
        .shelf
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SHELF);

    let per_page = clamp_int(query.per_page.as_deref(), MIN_PER_PAGE, MAX_PER_PAGE, 200);
    let page = clamp_int(query.page.as_deref(), MIN_PAGE, MAX_PAGE, 1);

    Ok(ShelfRequest {
        user_id: user_id.to_string(),
        shelf: shelf.to_string(),
        per_page,
        page,
    })
}

/// Parse an optional integer parameter, clamping into [min, max] and falling
/// back to `fallback` when the value is absent or carries no leading integer.
fn clamp_int(value: Option<&str>, min: i64, max: i64, fallback: u32) -> u32 {
    match value.map(str::trim).and_then(parse_int_prefix) {
        Some(n) => n.clamp(min, max) as u32,
        None => fallback,
    }
}

/// Leading-integer parse: "5.7" is 5, "12abc" is 12, "abc" is nothing. Values
/// past the i64 range saturate; clamping bounds them anyway.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix(['-', '+']) {
        Some(r) => (s.starts_with('-'), r),
        None => (false, s),
    };
    let end = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    match rest[..end].parse::<i64>() {
        Ok(n) => Some(if negative { -n } else { n }),
        Err(_) => Some(if negative { i64::MIN } else { i64::MAX }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(user_id: Option<&str>, shelf: Option<&str>, per_page: Option<&str>, page: Option<&str>) -> ShelfQuery {
        ShelfQuery {
            user_id: user_id.map(str::to_string),
            shelf: shelf.map(str::to_string),
            per_page: per_page.map(str::to_string),
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn accepts_numeric_user_ids() {
        for id in ["1", "137464693", "0".repeat(20).as_str()] {
            let req = validate(&query(Some(id), None, None, None)).unwrap();
            assert_eq!(req.user_id, id);
        }
    }

    #[test]
    fn rejects_malformed_user_ids() {
        for id in ["", "abc", "12a", "-5", "   ", &"9".repeat(21)] {
            assert!(matches!(
                validate(&query(Some(id), None, None, None)),
                Err(AppError::InvalidUserId)
            ));
        }
        assert!(matches!(
            validate(&query(None, None, None, None)),
            Err(AppError::InvalidUserId)
        ));
    }

    #[test]
    fn trims_user_id_before_matching() {
        let req = validate(&query(Some("  42  "), None, None, None)).unwrap();
        assert_eq!(req.user_id, "42");
    }

    #[test]
    fn shelf_defaults_to_to_read() {
        let req = validate(&query(Some("1"), None, None, None)).unwrap();
        assert_eq!(req.shelf, "to-read");
        let req = validate(&query(Some("1"), Some("  currently-reading "), None, None)).unwrap();
        assert_eq!(req.shelf, "currently-reading");
    }

    #[test]
    fn clamps_per_page_and_page() {
        let req = validate(&query(Some("1"), None, Some("9999"), Some("9999"))).unwrap();
        assert_eq!(req.per_page, 200);
        assert_eq!(req.page, 5);

        let req = validate(&query(Some("1"), None, Some("0"), Some("0"))).unwrap();
        assert_eq!(req.per_page, 1);
        assert_eq!(req.page, 1);
    }

    #[test]
    fn number_parsing_takes_the_leading_integer() {
        let req = validate(&query(Some("1"), None, Some("5.7"), Some("2abc"))).unwrap();
        assert_eq!(req.per_page, 5);
        assert_eq!(req.page, 2);

        // A value past the integer range saturates and then clamps.
        let req = validate(&query(Some("1"), None, Some("999999999999999999999"), Some("999999999999999999999"))).unwrap();
        assert_eq!(req.per_page, 200);
        assert_eq!(req.page, 5);

        let req = validate(&query(Some("1"), None, Some("-3"), Some("+2"))).unwrap();
        assert_eq!(req.per_page, 1);
        assert_eq!(req.page, 2);
    }

    #[test]
    fn falls_back_on_unparseable_numbers() {
        let req = validate(&query(Some("1"), None, Some("abc"), Some("abc"))).unwrap();
        assert_eq!(req.per_page, 200);
        assert_eq!(req.page, 1);

        let req = validate(&query(Some("1"), None, None, None)).unwrap();
        assert_eq!(req.per_page, 200);
        assert_eq!(req.page, 1);
    }
}
