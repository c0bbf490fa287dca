//! HTTP router.
//!
//! Composes all handlers into a single Axum router. Requests pass the
//! request-context layer first, then HTTP tracing, then the session layer.

use crate::config::SessionConfig;
use crate::handlers::{health, lists, todos};
use crate::middleware::request_context_layer;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Create the application router with all endpoints.
///
/// # Routes
///
/// - `GET /` - Redirect to `/lists`
/// - `GET /lists` - All lists
/// - `POST /lists` - Create a list
/// - `GET /lists/new` - List creation form
/// - `GET /lists/:id` - One list with its todos
/// - `POST /lists/:id` - Rename a list
/// - `GET /lists/:id/edit` - Rename form
/// - `POST /lists/:id/destroy` - Delete a list
/// - `POST /lists/:id/todos` - Add a todo
/// - `POST /lists/:id/complete_all` - Complete every todo
/// - `POST /lists/:id/todos/:todo_id` - Check or uncheck a todo
/// - `POST /lists/:id/todos/:todo_id/destroy` - Delete a todo
/// - `GET /health` - Liveness probe
/// - `GET /metrics` - Prometheus metrics
///
/// Sessions are kept in memory for the lifetime of the process.
pub fn router(state: AppState, session: &SessionConfig) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_secure(session.secure_cookie);

    Router::new()
        .route("/", get(lists::root))
        .route("/lists", get(lists::list_lists).post(lists::create_list))
        .route("/lists/new", get(lists::new_list))
        .route("/lists/:id", get(lists::view_list).post(lists::rename_list))
        .route("/lists/:id/edit", get(lists::edit_list))
        .route("/lists/:id/destroy", post(lists::destroy_list))
        .route("/lists/:id/todos", post(todos::add_todo))
        .route("/lists/:id/complete_all", post(todos::complete_all))
        .route("/lists/:id/todos/:todo_id", post(todos::toggle_todo))
        .route("/lists/:id/todos/:todo_id/destroy", post(todos::destroy_todo))
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(request_context_layer())
        .with_state(state)
}
