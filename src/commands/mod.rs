//! Remote Command Wrappers
//!
//! Bindings to the external todo collection, organized by domain.

mod todo;

use crate::error::FetchResult;
use crate::models::TodoItem;

/// Source of the full todo collection
///
/// The view only runs on the single-threaded browser event loop, so the
/// returned futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait TodoSource {
    async fn fetch_todos(&self) -> FetchResult<Vec<TodoItem>>;
}

// Re-export all public items
pub use todo::*;
