//! # Todo Lists Testing
//!
//! Testing utilities and helpers for the todo lists application.
//!
//! This crate provides:
//! - `ReducerTest`, a Given-When-Then harness for reducers
//! - Mock implementations of the session store
//! - Fixtures for common session states
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use todo_lists_testing::mocks::InMemorySessionStore;
//!
//! #[tokio::test]
//! async fn test_session_round_trip() {
//!     let store = InMemorySessionStore::new();
//!     let mut state = store.load().await?;
//!     state.set_success("saved");
//!     store.save(&state).await?;
//!     assert_eq!(store.snapshot()?.success.as_deref(), Some("saved"));
//! }
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of the session store
pub mod mocks {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use todo_lists_core::session::{SessionStore, SessionStoreError};
    use todo_lists_core::types::SessionState;

    /// In-memory session store for one browser session.
    ///
    /// Clones share the same underlying state, so a test can keep a handle
    /// and inspect what the code under test saved.
    #[derive(Debug, Clone, Default)]
    pub struct InMemorySessionStore {
        state: Arc<Mutex<SessionState>>,
        saves: Arc<AtomicUsize>,
    }

    impl InMemorySessionStore {
        /// Create a store holding an empty session.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a store holding `state`.
        #[must_use]
        pub fn with_state(state: SessionState) -> Self {
            Self {
                state: Arc::new(Mutex::new(state)),
                saves: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Copy of the currently stored state.
        ///
        /// # Errors
        ///
        /// Returns error if lock is poisoned.
        pub fn snapshot(&self) -> Result<SessionState, SessionStoreError> {
            self.state
                .lock()
                .map(|state| state.clone())
                .map_err(|_| SessionStoreError::Load("Mutex lock failed".to_string()))
        }

        /// Number of times `save` has been called.
        #[must_use]
        pub fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl SessionStore for InMemorySessionStore {
        async fn load(&self) -> Result<SessionState, SessionStoreError> {
            self.snapshot()
        }

        async fn save(&self, state: &SessionState) -> Result<(), SessionStoreError> {
            let mut guard = self
                .state
                .lock()
                .map_err(|_| SessionStoreError::Save("Mutex lock failed".to_string()))?;
            *guard = state.clone();
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Session store whose backend is always down.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UnavailableSessionStore;

    impl SessionStore for UnavailableSessionStore {
        async fn load(&self) -> Result<SessionState, SessionStoreError> {
            Err(SessionStoreError::Load("session backend unavailable".to_string()))
        }

        async fn save(&self, _state: &SessionState) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Save("session backend unavailable".to_string()))
        }
    }
}

/// Fixtures for common session states
pub mod fixtures {
    use todo_lists_core::types::{SessionState, TodoList};

    /// A list with the given `(name, completed)` todos.
    #[must_use]
    pub fn list(name: &str, todos: &[(&str, bool)]) -> TodoList {
        todos
            .iter()
            .fold(TodoList::new(name.to_string()), |list, (todo, completed)| {
                list.with_todo(*todo, *completed)
            })
    }

    /// Three lists: "Groceries" (two open todos), "Work" (one done, one
    /// open) and "Chores" (empty).
    #[must_use]
    pub fn three_lists() -> SessionState {
        SessionState::with_lists(vec![
            list("Groceries", &[("Milk", false), ("Eggs", false)]),
            list("Work", &[("Report", true), ("Review", false)]),
            list("Chores", &[]),
        ])
    }

    /// A session with one list named `name` holding `todos`.
    #[must_use]
    pub fn single_list(name: &str, todos: &[(&str, bool)]) -> SessionState {
        SessionState::with_lists(vec![list(name, todos)])
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Names that pass validation once trimmed: 1 to 100 characters with no
    /// surrounding whitespace.
    pub fn valid_name() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 ]{0,98}[A-Za-z0-9]|[A-Za-z0-9]"
    }

    /// Names longer than the 100 character limit.
    pub fn overlong_name() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]{101,160}"
    }

    /// Input that is empty after trimming.
    pub fn blank_name() -> impl Strategy<Value = String> {
        "[ \t\n]{0,10}"
    }

    /// Strings that are not integer literals.
    pub fn malformed_index() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("+".to_string()),
            Just("1.5".to_string()),
            "[a-z]{1,5}",
            "[0-9]{1,3} ",
        ]
    }
}

/// Install a tracing subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::mocks::{InMemorySessionStore, UnavailableSessionStore};
    use super::*;
    use todo_lists_core::session::SessionStore;
    use todo_lists_core::view::uncompleted_count;

    #[tokio::test]
    async fn in_memory_store_round_trip() {
        let store = InMemorySessionStore::new();
        let mut state = store.load().await.unwrap();
        assert!(state.lists.is_empty());

        state.lists.push(fixtures::list("Groceries", &[("Milk", false)]));
        store.save(&state).await.unwrap();

        let handle = store.clone();
        assert_eq!(handle.snapshot().unwrap(), state);
        assert_eq!(handle.save_count(), 1);
    }

    #[tokio::test]
    async fn unavailable_store_fails() {
        assert!(UnavailableSessionStore.load().await.is_err());
        assert!(
            UnavailableSessionStore
                .save(&fixtures::three_lists())
                .await
                .is_err()
        );
    }

    #[test]
    fn three_lists_fixture() {
        let state = fixtures::three_lists();
        assert_eq!(state.lists.len(), 3);
        assert_eq!(uncompleted_count(&state.lists[1].todos), 1);
        assert!(state.lists[2].todos.is_empty());
    }
}
