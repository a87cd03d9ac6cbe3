//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpTodoSource;
use crate::config::AppConfig;
use crate::error::ValidationError;
use crate::search::{search, submit_query, Completion};
use crate::store::ViewStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive view state
    store: ViewStore,
    /// Endpoint and user-facing messages
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: ViewStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Start a fetch-and-filter cycle; state updates land asynchronously.
    /// An empty query fetches without filtering.
    pub fn search(&self, query: &str) {
        let store = self.store;
        let config = self.config.get_value();
        let query = query.to_string();
        spawn_local(async move {
            let source = HttpTodoSource::new(config.endpoint);
            search(&source, &store, &query, &config.fetch_failed_message).await;
        });
    }

    /// Validate form input and search with it. `on_done` runs once the
    /// input is rejected or the search has completed.
    pub fn submit(
        &self,
        input: String,
        on_done: impl FnOnce(Result<Completion, ValidationError>) + 'static,
    ) {
        let store = self.store;
        let config = self.config.get_value();
        spawn_local(async move {
            let source = HttpTodoSource::new(config.endpoint);
            let result = submit_query(&input, &source, &store, &config.fetch_failed_message).await;
            on_done(result);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
