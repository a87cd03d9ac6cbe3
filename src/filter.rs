//! Title Filter
//!
//! Case-insensitive substring match over fetched items.

use crate::models::TodoItem;

/// Keep items whose title contains `query`, ignoring case.
/// An empty query keeps everything. Source order is preserved.
pub fn filter_todos(items: &[TodoItem], query: &str) -> Vec<TodoItem> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
