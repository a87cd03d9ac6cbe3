//! Todo List Component
//!
//! Loading indicator, error banner, filtered list or empty-state message.

use leptos::prelude::*;

use crate::render::{item_class, ListDisplay, LOADING_MESSAGE, NO_RESULTS_MESSAGE};
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_view_store();

    let display = move || {
        ListDisplay::from_parts(
            store.is_loading().get(),
            store.error().get(),
            store.filtered_items().get(),
        )
    };

    view! {
        <div class="todo-results">
            {move || match display() {
                ListDisplay::Loading => view! {
                    <p class="loading">{LOADING_MESSAGE}</p>
                }.into_any(),
                ListDisplay::Error(message) => view! {
                    <p class="error">{message}</p>
                }.into_any(),
                ListDisplay::Items(items) => view! {
                    <ul class="todo-list">
                        {items.into_iter().map(|item| {
                            let class = item_class(&item);
                            view! { <li class=class>{item.title}</li> }
                        }).collect_view()}
                    </ul>
                }.into_any(),
                ListDisplay::NoResults => view! {
                    <p class="no-results">{NO_RESULTS_MESSAGE}</p>
                }.into_any(),
            }}
        </div>
    }
}
