//! Frontend Models
//!
//! Data structures matching the remote todo collection.

use serde::Deserialize;

/// One record of the remote todo collection (matches the JSON payload)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}
