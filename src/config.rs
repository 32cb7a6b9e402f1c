use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

/// Default Goodreads base URL for the shelf RSS feed.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://www.goodreads.com";

/// Ceiling on the retrieved feed body, in bytes. Anything larger is rejected
/// before extraction runs.
pub const DEFAULT_MAX_FEED_BYTES: usize = 2_000_000;

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Base URL the shelf feed is fetched from. Overridable so tests can point
    /// the retriever at a local mock server.
    pub upstream_base: String,
    pub max_feed_bytes: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let upstream_base = env::var("GOODREADS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let max_feed_bytes = match env::var("MAX_FEED_BYTES") {
            Ok(v) => v
                .parse::<usize>()
                .map_err(|e| AppError::Config(format!("Invalid MAX_FEED_BYTES: {}", e)))?,
            Err(_) => DEFAULT_MAX_FEED_BYTES,
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            upstream_base,
            max_feed_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutation is process-wide, so every Config::load case lives in this
    // one test to keep them from racing each other.
    #[test]
    fn load_defaults_and_overrides() {
        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("GOODREADS_BASE_URL");
            env::remove_var("MAX_FEED_BYTES");
        }

        let config = Config::load().unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.upstream_base, DEFAULT_UPSTREAM_BASE);
        assert_eq!(config.max_feed_bytes, DEFAULT_MAX_FEED_BYTES);

        unsafe {
            env::set_var("GOODREADS_BASE_URL", "http://localhost:9999/");
            env::set_var("MAX_FEED_BYTES", "64");
        }

        let config = Config::load().unwrap();
        // Trailing slash is trimmed so URL joins stay clean.
        assert_eq!(config.upstream_base, "http://localhost:9999");
        assert_eq!(config.max_feed_bytes, 64);

        unsafe {
            env::remove_var("GOODREADS_BASE_URL");
            env::remove_var("MAX_FEED_BYTES");
        }
    }
}
