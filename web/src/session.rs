//! Cookie-backed session storage.
//!
//! The whole [`SessionState`] lives under a single key of a `tower-sessions`
//! session. The session id travels in the [`SESSION_COOKIE`] cookie; the data
//! stays server side in the session layer's store.

use crate::error::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use todo_lists_core::{SessionState, SessionStore, SessionStoreError};
use tower_sessions::Session;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "todo_lists.sid";

/// Key the session state is stored under.
pub const STATE_KEY: &str = "todo_lists.state";

/// [`SessionStore`] over the current request's `tower-sessions` session.
///
/// Requires [`SessionManagerLayer`](tower_sessions::SessionManagerLayer) on
/// the router; without it extraction fails with a 500.
#[derive(Clone, Debug)]
pub struct CookieSession(Session);

impl CookieSession {
    /// Wraps a session handed out by the session layer.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }
}

impl SessionStore for CookieSession {
    async fn load(&self) -> Result<SessionState, SessionStoreError> {
        self.0
            .get::<SessionState>(STATE_KEY)
            .await
            .map(Option::unwrap_or_default)
            .map_err(|e| SessionStoreError::Load(e.to_string()))
    }

    async fn save(&self, state: &SessionState) -> Result<(), SessionStoreError> {
        self.0
            .insert(STATE_KEY, state)
            .await
            .map_err(|e| SessionStoreError::Save(e.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CookieSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state)
            .await
            .map(Self)
            .map_err(|(status, reason)| {
                tracing::error!(%status, reason, "Session layer missing");
                AppError::internal("Your session could not be accessed")
            })
    }
}
