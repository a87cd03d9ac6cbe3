//! Todo Search App
//!
//! Root component: owns the view store and loads the full list on mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{SearchForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ViewState::new());
    let ctx = AppContext::new(store, AppConfig::default());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load everything on mount, unfiltered
    Effect::new(move |_| {
        ctx.search("");
    });

    view! {
        <div class="App">
            <h1>"Todo Search"</h1>
            <SearchForm />
            <TodoList />
        </div>
    }
}
