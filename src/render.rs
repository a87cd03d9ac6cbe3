//! Rendering Policy
//!
//! Decides what the list area shows for a given view state, independent of
//! the DOM.

use crate::models::TodoItem;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Content of the list area, in priority order
#[derive(Debug, Clone, PartialEq)]
pub enum ListDisplay {
    Loading,
    Error(String),
    Items(Vec<TodoItem>),
    NoResults,
}

impl ListDisplay {
    pub fn from_parts(is_loading: bool, error: Option<String>, filtered_items: Vec<TodoItem>) -> Self {
        if is_loading {
            ListDisplay::Loading
        } else if let Some(message) = error {
            ListDisplay::Error(message)
        } else if filtered_items.is_empty() {
            ListDisplay::NoResults
        } else {
            ListDisplay::Items(filtered_items)
        }
    }
}

/// CSS class for a list entry
pub fn item_class(item: &TodoItem) -> &'static str {
    if item.completed { "completed" } else { "" }
}
