//! Search Form Component
//!
//! Query input with required-field validation. Valid submissions trigger a
//! search; empty ones are rejected inline and never reach the network.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::query::SearchQuery;

#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_app_context();

    let (query, set_query) = signal(String::new());
    let (validation_error, set_validation_error) = signal::<Option<String>>(None);
    let (submitted, set_submitted) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    let show_validation = move |result: Result<(), ValidationError>| {
        set_validation_error.set(result.err().map(|err| err.to_string()));
    };

    // Button stays disabled until the input is rejected or the search lands
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_submitted.set(true);
        set_is_submitting.set(true);
        ctx.submit(query.get_untracked(), move |result| {
            if let Err(err) = &result {
                log::debug!("[FORM] Submission rejected: {}", err);
            }
            show_validation(result.map(|_| ()));
            set_is_submitting.set(false);
        });
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                type="text"
                name="search"
                placeholder="Search todos..."
                class="search-input"
                prop:value=move || query.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    // Re-check live once the user has tried to submit
                    if submitted.get_untracked() {
                        show_validation(SearchQuery::parse(&value).map(|_| ()));
                    }
                    set_query.set(value);
                }
            />
            <button
                type="submit"
                class="search-button"
                disabled=move || is_submitting.get()
            >
                "Search"
            </button>
            {move || validation_error.get().map(|message| view! {
                <div class="error">{message}</div>
            })}
        </form>
    }
}
