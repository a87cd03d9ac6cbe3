//! Error Types
//!
//! Fetch failures and form validation failures. Fetch errors keep their cause
//! for the console log; the view only ever shows the configured message.

use thiserror::Error;

/// Why a fetch of the todo collection failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Decode(String),
}

/// Rejected form input. Never reaches the fetch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Search query is required")]
    EmptyQuery,
}

pub type FetchResult<T> = Result<T, FetchError>;
