use serde::{Deserialize, Serialize};

/// Raw, unvalidated query parameters for the shelf endpoint. Numbers arrive as
/// strings so out-of-range and unparseable values can fall back instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ShelfQuery {
    pub user_id: Option<String>,
    pub shelf: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
}

/// One normalized book record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct ShelfResponse {
    pub books: Vec<Book>,
}
