//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through the transition functions on `ViewState`.

use std::cell::RefCell;
use std::fmt;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::filter_todos;
use crate::models::TodoItem;

/// Sequence number handed out at every fetch start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything needed to render the search view
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Collection from the last successful fetch
    pub items: Vec<TodoItem>,
    /// `items` narrowed by the query of that fetch
    pub filtered_items: Vec<TodoItem>,
    /// True while the latest request is in flight
    pub is_loading: bool,
    /// Set only when the latest request failed
    pub error: Option<String>,
    /// Last issued request; older completions are dropped
    pub latest_request: RequestId,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch-start: mark loading, clear the error, issue a new request id.
    pub fn begin_fetch(&mut self) -> RequestId {
        self.latest_request = RequestId(self.latest_request.0 + 1);
        self.is_loading = true;
        self.error = None;
        self.latest_request
    }

    /// Fetch-success: replace the collection and recompute the filtered view.
    /// Returns false (and changes nothing) for a superseded request.
    pub fn finish_success(&mut self, request: RequestId, items: Vec<TodoItem>, query: &str) -> bool {
        if request != self.latest_request {
            return false;
        }
        self.filtered_items = filter_todos(&items, query);
        self.items = items;
        self.is_loading = false;
        true
    }

    /// Fetch-failure: record the message, keep the previous items.
    /// Returns false (and changes nothing) for a superseded request.
    pub fn finish_failure(&mut self, request: RequestId, message: &str) -> bool {
        if request != self.latest_request {
            return false;
        }
        self.error = Some(message.to_string());
        self.is_loading = false;
        true
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// Somewhere a `ViewState` lives and can be updated in place
pub trait ViewStateHandle {
    fn apply<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R;
}

impl ViewStateHandle for ViewStore {
    fn apply<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

impl ViewStateHandle for RefCell<ViewState> {
    fn apply<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
