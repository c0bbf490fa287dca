//! Application state for Axum handlers.
//!
//! Handlers build a [`ListAction`] from the request and hand it to
//! [`AppState::dispatch`], which runs the reducer against the request's
//! session and turns the resulting [`Effect`] into a response.

use crate::error::AppError;
use crate::middleware::RequestContext;
use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;
use todo_lists_core::reducer::Reducer;
use todo_lists_core::{Effect, ListAction, ListsEnvironment, ListsReducer, SessionStore};

/// Application state shared across all HTTP handlers.
#[derive(Clone, Default)]
pub struct AppState {
    reducer: ListsReducer,
    environment: ListsEnvironment,
    metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub const fn new(environment: ListsEnvironment) -> Self {
        Self {
            reducer: ListsReducer::new(),
            environment,
            metrics: None,
        }
    }

    /// Attach the Prometheus handle served on `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Prometheus handle, if metrics are enabled.
    #[must_use]
    pub const fn metrics(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }

    /// Runs `action` against the session held by `store`.
    ///
    /// The action name and its outcome are recorded on the request span of
    /// `context` and counted in the `todo_lists.actions` metric. Rendered pages consume the session's messages before the state is
    /// saved, so each message is shown exactly once. A reducer error skips
    /// the save entirely.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the session cannot be loaded or saved, or
    /// when the request carries malformed input.
    pub async fn dispatch<S: SessionStore>(
        &self,
        store: &S,
        context: &RequestContext,
        action: ListAction,
    ) -> Result<Response, AppError> {
        let name = action.name();
        let mut session = store.load().await?;

        let effect = match self.reducer.reduce(&mut session, action, &self.environment) {
            Ok(effect) => effect,
            Err(error) => {
                tracing::warn!(request_id = %context.id, action = name, %error, "Action failed");
                record(context, name, "error");
                return Err(error.into());
            }
        };

        tracing::debug!(
            request_id = %context.id,
            action = name,
            effect = effect.kind(),
            "Action reduced"
        );
        record(context, name, effect.kind());

        let response = match effect {
            Effect::Render(view) => {
                let messages = session.take_messages();
                Html(views::render(&view, &session.lists, &messages)).into_response()
            }
            Effect::Redirect(location) => Redirect::to(&location).into_response(),
            Effect::Status(code) => StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response(),
        };

        store.save(&session).await?;
        Ok(response)
    }
}

fn record(context: &RequestContext, action: &'static str, outcome: &'static str) {
    context.record_outcome(action, outcome);
    metrics::counter!("todo_lists.actions", "action" => action, "outcome" => outcome)
        .increment(1);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use todo_lists_core::Responder;
    use todo_lists_testing::fixtures;
    use todo_lists_testing::mocks::{InMemorySessionStore, UnavailableSessionStore};
    use uuid::Uuid;

    fn context() -> RequestContext {
        RequestContext::new(Uuid::new_v4())
    }

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn redirect_saves_state_and_keeps_message() {
        let state = AppState::default();
        let store = InMemorySessionStore::new();

        let response = state
            .dispatch(
                &store,
                &context(),
                ListAction::CreateList {
                    name: "Groceries".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/lists");

        let saved = store.snapshot().unwrap();
        assert_eq!(saved.lists.len(), 1);
        assert_eq!(saved.success.as_deref(), Some("The list has been created."));
    }

    #[tokio::test]
    async fn render_consumes_messages() {
        let state = AppState::default();
        let mut session = fixtures::three_lists();
        session.set_success("The list has been created.");
        let store = InMemorySessionStore::with_state(session);

        let response = state
            .dispatch(&store, &context(), ListAction::ListLists)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body(response).await.contains("The list has been created."));
        assert_eq!(store.snapshot().unwrap().success, None);
    }

    #[tokio::test]
    async fn programmatic_delete_answers_with_status() {
        let state = AppState::default();
        let store = InMemorySessionStore::with_state(fixtures::three_lists());

        let response = state
            .dispatch(
                &store,
                &context(),
                ListAction::DeleteList {
                    list_index: "0".to_string(),
                    responder: Responder::Programmatic,
                },
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let saved = store.snapshot().unwrap();
        assert_eq!(saved.lists.len(), 2);
        assert_eq!(saved.success, None);
    }

    #[tokio::test]
    async fn malformed_input_skips_save() {
        let state = AppState::default();
        let store = InMemorySessionStore::with_state(fixtures::three_lists());

        let err = state
            .dispatch(
                &store,
                &context(),
                ListAction::ToggleTodo {
                    list_index: "0".to_string(),
                    todo_index: "0".to_string(),
                    completed: "maybe".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn unavailable_session_is_internal_error() {
        let err = AppState::default()
            .dispatch(&UnavailableSessionStore, &context(), ListAction::ListLists)
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
