//! UI Components
//!
//! Leptos components of the search view.

mod search_form;
mod todo_list;

pub use search_form::SearchForm;
pub use todo_list::TodoList;
