//! Application Configuration
//!
//! Fixed settings for the view, provided to components via context.

use log::LevelFilter;

/// Remote collection fetched on every search
pub const TODOS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Message shown for any failed fetch, whatever the cause
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch todos. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
    pub fetch_failed_message: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: TODOS_ENDPOINT.to_string(),
            fetch_failed_message: FETCH_FAILED_MESSAGE.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
