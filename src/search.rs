//! Search Operation
//!
//! Runs one fetch-and-filter cycle against a `TodoSource`, driving the
//! `ViewState` transitions. Overlapping searches are resolved by request id:
//! only the most recently issued search may complete into the state.

use crate::commands::TodoSource;
use crate::error::ValidationError;
use crate::query::SearchQuery;
use crate::store::{ViewState, ViewStateHandle};

/// What happened to a search once its fetch resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Superseded,
}

/// Fetch the whole collection and filter it by `query` (empty = no filter).
pub async fn search<S, H>(source: &S, state: &H, query: &str, failure_message: &str) -> Completion
where
    S: TodoSource + ?Sized,
    H: ViewStateHandle,
{
    let request = state.apply(ViewState::begin_fetch);
    log::debug!("[SEARCH] Request {} started, query={:?}", request, query);

    let outcome = source.fetch_todos().await;

    let applied = state.apply(|s| match outcome {
        Ok(items) => {
            let total = items.len();
            let applied = s.finish_success(request, items, query);
            if applied {
                log::info!(
                    "[SEARCH] Request {}: {} of {} todos match {:?}",
                    request,
                    s.filtered_items.len(),
                    total,
                    query
                );
            }
            applied
        }
        Err(err) => {
            log::error!("[SEARCH] Request {} failed: {}", request, err);
            s.finish_failure(request, failure_message)
        }
    });

    if applied {
        Completion::Applied
    } else {
        log::debug!("[SEARCH] Request {} superseded, response dropped", request);
        Completion::Superseded
    }
}

/// Form submission: reject empty input before touching the state or the
/// network, otherwise run a normal search.
pub async fn submit_query<S, H>(
    input: &str,
    source: &S,
    state: &H,
    failure_message: &str,
) -> Result<Completion, ValidationError>
where
    S: TodoSource + ?Sized,
    H: ViewStateHandle,
{
    let query = SearchQuery::parse(input)?;
    Ok(search(source, state, query.as_str(), failure_message).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, FetchResult};
    use crate::models::TodoItem;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::poll;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::pin::pin;

    const FAILED: &str = "Failed to fetch todos. Please try again.";

    fn make_item(id: u32, title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            completed,
            user_id: 1,
        }
    }

    fn collection() -> Vec<TodoItem> {
        vec![
            make_item(1, "Buy milk", false),
            make_item(2, "Walk dog", true),
        ]
    }

    /// Answers every fetch with the same result and counts calls
    struct FixedSource {
        result: FetchResult<Vec<TodoItem>>,
        calls: Cell<usize>,
    }

    impl FixedSource {
        fn new(result: FetchResult<Vec<TodoItem>>) -> Self {
            Self { result, calls: Cell::new(0) }
        }
    }

    impl TodoSource for FixedSource {
        async fn fetch_todos(&self) -> FetchResult<Vec<TodoItem>> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Answers fetches in call order, each when the test resolves it
    struct ScriptedSource {
        pending: RefCell<VecDeque<oneshot::Receiver<FetchResult<Vec<TodoItem>>>>>,
    }

    impl TodoSource for ScriptedSource {
        async fn fetch_todos(&self) -> FetchResult<Vec<TodoItem>> {
            let rx = self.pending.borrow_mut().pop_front().expect("unexpected fetch");
            rx.await
                .unwrap_or_else(|_| Err(FetchError::Network("sender dropped".to_string())))
        }
    }

    #[test]
    fn test_search_filters_collection() {
        let source = FixedSource::new(Ok(collection()));
        let state = RefCell::new(ViewState::new());

        let completion = block_on(search(&source, &state, "milk", FAILED));

        assert_eq!(completion, Completion::Applied);
        let state = state.borrow();
        assert_eq!(state.filtered_items, vec![make_item(1, "Buy milk", false)]);
        assert_eq!(state.items, collection());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_search_without_matches() {
        let source = FixedSource::new(Ok(collection()));
        let state = RefCell::new(ViewState::new());

        block_on(search(&source, &state, "xyz", FAILED));

        assert!(state.borrow().filtered_items.is_empty());
        assert_eq!(state.borrow().items.len(), 2);
    }

    #[test]
    fn test_empty_search_is_idempotent() {
        let source = FixedSource::new(Ok(collection()));
        let state = RefCell::new(ViewState::new());

        block_on(search(&source, &state, "", FAILED));
        let once = state.borrow().filtered_items.clone();
        block_on(search(&source, &state, "", FAILED));

        assert_eq!(once, collection());
        assert_eq!(state.borrow().filtered_items, once);
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_every_search_refetches() {
        let source = FixedSource::new(Ok(collection()));
        let state = RefCell::new(ViewState::new());

        block_on(search(&source, &state, "milk", FAILED));
        block_on(search(&source, &state, "dog", FAILED));

        assert_eq!(source.calls.get(), 2);
        assert_eq!(state.borrow().filtered_items, vec![make_item(2, "Walk dog", true)]);
    }

    #[test]
    fn test_failed_fetch_sets_error() {
        let source = FixedSource::new(Err(FetchError::Network("offline".to_string())));
        let state = RefCell::new(ViewState::new());

        block_on(search(&source, &state, "", FAILED));

        let state = state.borrow();
        assert_eq!(state.error.as_deref(), Some(FAILED));
        assert!(!state.is_loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_failure_after_success_keeps_items() {
        let state = RefCell::new(ViewState::new());
        block_on(search(&FixedSource::new(Ok(collection())), &state, "milk", FAILED));
        block_on(search(&FixedSource::new(Err(FetchError::Status(503))), &state, "dog", FAILED));

        let state = state.borrow();
        assert_eq!(state.error.as_deref(), Some(FAILED));
        assert_eq!(state.filtered_items, vec![make_item(1, "Buy milk", false)]);
    }

    #[test]
    fn test_loading_while_pending() {
        let (tx, rx) = oneshot::channel();
        let source = ScriptedSource { pending: RefCell::new(VecDeque::from([rx])) };
        let state = RefCell::new(ViewState::new());

        block_on(async {
            let mut pending = pin!(search(&source, &state, "milk", FAILED));
            assert!(poll!(pending.as_mut()).is_pending());
            assert!(state.borrow().is_loading);
            assert!(state.borrow().error.is_none());

            tx.send(Ok(collection())).unwrap();
            assert_eq!(pending.await, Completion::Applied);
        });

        assert!(!state.borrow().is_loading);
    }

    #[test]
    fn test_latest_issued_search_wins() {
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        let source = ScriptedSource { pending: RefCell::new(VecDeque::from([rx_old, rx_new])) };
        let state = RefCell::new(ViewState::new());

        block_on(async {
            let mut older = pin!(search(&source, &state, "milk", FAILED));
            let mut newer = pin!(search(&source, &state, "dog", FAILED));
            assert!(poll!(older.as_mut()).is_pending());
            assert!(poll!(newer.as_mut()).is_pending());

            // Newer response lands first, older one straggles in afterwards
            tx_new.send(Ok(collection())).unwrap();
            assert_eq!(newer.await, Completion::Applied);
            tx_old.send(Err(FetchError::Status(500))).unwrap();
            assert_eq!(older.await, Completion::Superseded);
        });

        let state = state.borrow();
        assert_eq!(state.filtered_items, vec![make_item(2, "Walk dog", true)]);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_empty_submission_never_fetches() {
        let source = FixedSource::new(Ok(collection()));
        let state = RefCell::new(ViewState::new());
        block_on(search(&source, &state, "milk", FAILED));
        let before = state.borrow().clone();

        let result = block_on(submit_query("", &source, &state, FAILED));

        assert_eq!(result, Err(ValidationError::EmptyQuery));
        assert_eq!(source.calls.get(), 1);
        let after = state.borrow();
        assert_eq!(after.items, before.items);
        assert_eq!(after.filtered_items, before.filtered_items);
        assert_eq!(after.is_loading, before.is_loading);
        assert_eq!(after.error, before.error);
        assert_eq!(after.latest_request, before.latest_request);
    }

    #[test]
    fn test_empty_submission_on_fresh_view() {
        let source = FixedSource::new(Ok(collection()));
        let state = RefCell::new(ViewState::new());

        let result = block_on(submit_query("", &source, &state, FAILED));

        assert_eq!(result, Err(ValidationError::EmptyQuery));
        assert_eq!(source.calls.get(), 0);
        assert!(!state.borrow().is_loading);
        assert!(state.borrow().items.is_empty());
    }

    #[test]
    fn test_submission_runs_search() {
        let source = FixedSource::new(Ok(collection()));
        let state = RefCell::new(ViewState::new());

        let result = block_on(submit_query("Dog", &source, &state, FAILED));

        assert_eq!(result, Ok(Completion::Applied));
        assert_eq!(source.calls.get(), 1);
        assert_eq!(state.borrow().filtered_items, vec![make_item(2, "Walk dog", true)]);
    }

    #[test]
    fn test_submission_pending_until_fetch_resolves() {
        let (tx, rx) = oneshot::channel();
        let source = ScriptedSource { pending: RefCell::new(VecDeque::from([rx])) };
        let state = RefCell::new(ViewState::new());

        block_on(async {
            let mut submission = pin!(submit_query("milk", &source, &state, FAILED));
            assert!(poll!(submission.as_mut()).is_pending());
            assert!(state.borrow().is_loading);

            tx.send(Ok(collection())).unwrap();
            assert_eq!(submission.await, Ok(Completion::Applied));
        });
    }

    #[test]
    fn test_search_through_reactive_store() {
        use crate::store::ViewStateStoreFields;
        use leptos::prelude::*;
        use reactive_stores::Store;

        let owner = Owner::new();
        owner.set();
        let store = Store::new(ViewState::new());

        let completion = block_on(search(&FixedSource::new(Ok(collection())), &store, "MILK", FAILED));

        assert_eq!(completion, Completion::Applied);
        assert_eq!(store.filtered_items().get_untracked(), vec![make_item(1, "Buy milk", false)]);
        assert_eq!(store.items().get_untracked().len(), 2);
        assert!(!store.is_loading().get_untracked());
        assert!(store.error().get_untracked().is_none());
    }
}
