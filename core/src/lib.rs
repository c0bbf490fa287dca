//! # Todo Lists Core
//!
//! The functional core of the todo lists application.
//!
//! A browser session holds an ordered collection of named lists, each with an
//! ordered collection of todos. Every page request becomes a [`ListAction`]
//! that is reduced against the session's [`SessionState`]; the reducer
//! validates the input, mutates the collections and returns an [`Effect`]
//! describing what the web shell should answer with.
//!
//! ## Core Concepts
//!
//! - **State**: [`SessionState`], the lists plus the read-once message slots
//! - **Action**: [`ListAction`], one variant per page operation
//! - **Reducer**: [`ListsReducer`], `(State, Action, Environment) → Effect`
//! - **Effect**: render a view, redirect, or answer with a bare status
//! - **Environment**: [`ListsEnvironment`], behavior switches injected by the shell
//!
//! Lists and todos are addressed by position. Raw path segments are turned
//! into positions only by [`validation::validate_index`].
//!
//! ## Example
//!
//! ```
//! use todo_lists_core::{Effect, ListAction, ListsEnvironment, ListsReducer, SessionState};
//! use todo_lists_core::reducer::Reducer;
//!
//! let mut state = SessionState::new();
//! let effect = ListsReducer::new()
//!     .reduce(
//!         &mut state,
//!         ListAction::CreateList { name: "  Groceries ".to_string() },
//!         &ListsEnvironment::default(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(effect, Effect::redirect("/lists"));
//! assert_eq!(state.lists[0].name, "Groceries");
//! ```

pub mod error;
pub mod lists;
pub mod paths;
pub mod session;
pub mod types;
pub mod validation;
pub mod view;

pub use error::{ListError, NameKind, Resource};
pub use lists::{ListsEnvironment, ListsReducer, RenamePolicy};
pub use session::{SessionStore, SessionStoreError};
pub use types::{ListAction, Messages, Responder, SessionState, Todo, TodoList, View};

/// Reducer module - The core trait for request handling logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Effect`.
/// They contain all business logic and are deterministic and testable without
/// a web server or session backend.
pub mod reducer {
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for request handling
    ///
    /// # Type Parameters
    ///
    /// - `State`: The session state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected configuration this reducer needs
    /// - `Error`: Failures that abort the request without touching state
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Errors that are fatal to the request
        type Error;

        /// Reduce an action into state changes and a response effect
        ///
        /// Recoverable validation failures are reported through the state's
        /// message slots and an ordinary effect. Only failures that must
        /// abort the request are returned as `Err`, in which case the state
        /// is left as it was.
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is fatal to the request.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Effect, Self::Error>;
    }
}

/// Effect module - Response descriptions
///
/// Effects are NOT executed by the reducer. They describe what the web shell
/// should answer with once the state has been written back to the session.
pub mod effect {
    use crate::types::View;

    /// Effect type - describes the response to a reduced action
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// Render a page from the current state
        Render(View),

        /// Redirect the browser to another path
        Redirect(String),

        /// Answer with a bare status code (programmatic requests)
        Status(u16),
    }

    impl Effect {
        /// Redirect to the given path
        #[must_use]
        pub fn redirect(path: impl Into<String>) -> Self {
            Self::Redirect(path.into())
        }

        /// Short label for logs and metrics
        #[must_use]
        pub const fn kind(&self) -> &'static str {
            match self {
                Self::Render(_) => "render",
                Self::Redirect(_) => "redirect",
                Self::Status(_) => "status",
            }
        }
    }
}

pub use effect::Effect;
