//! Session store contract.
//!
//! The session backend is an external collaborator. The core only needs to
//! load the current browser's state at the start of a request and write it
//! back at the end.

use crate::types::SessionState;
use std::future::Future;
use thiserror::Error;

/// Errors from a session backend.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The stored value could not be read or decoded
    #[error("Failed to load session: {0}")]
    Load(String),

    /// The state could not be written back
    #[error("Failed to save session: {0}")]
    Save(String),
}

/// Per-browser session storage.
///
/// An implementation is bound to one browser session; implementations for
/// web frameworks are built per request from the session cookie.
pub trait SessionStore: Send + Sync {
    /// Load the session state.
    ///
    /// A session that has never been written loads as an empty state.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Load` if the backend fails or holds a
    /// value that cannot be decoded.
    fn load(&self) -> impl Future<Output = Result<SessionState, SessionStoreError>> + Send;

    /// Write the session state back.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Save` if the backend fails.
    fn save(&self, state: &SessionState) -> impl Future<Output = Result<(), SessionStoreError>> + Send;
}
