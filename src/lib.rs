pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod feed;
pub mod link;
pub mod params;
pub mod text;

use std::sync::Arc;
use config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}
