//! Todo actions within a list.

use crate::WebResult;
use crate::extractors::{HtmlForm, ListIndex, RequestedWith, TodoIndices};
use crate::middleware::RequestContext;
use crate::session::CookieSession;
use crate::state::AppState;
use axum::{extract::State, response::Response};
use serde::Deserialize;
use todo_lists_core::ListAction;

/// Form submitted when adding a todo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TodoForm {
    /// Todo name, untrimmed.
    pub todo: String,
}

/// Form submitted when checking or unchecking a todo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompletedForm {
    /// `"true"` or `"false"`; anything else is rejected with a 400.
    pub completed: String,
}

/// `POST /lists/:id/todos`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed or the form
/// body is rejected.
pub async fn add_todo(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    ListIndex(list_index): ListIndex,
    HtmlForm(form): HtmlForm<TodoForm>,
) -> WebResult<Response> {
    let action = ListAction::AddTodo {
        list_index,
        name: form.todo,
    };
    state.dispatch(&session, &context, action).await
}

/// `POST /lists/:id/todos/:todo_id`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed or the form body
/// does not carry a `completed` of `"true"` or `"false"`.
pub async fn toggle_todo(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    TodoIndices(list_index, todo_index): TodoIndices,
    HtmlForm(form): HtmlForm<CompletedForm>,
) -> WebResult<Response> {
    let action = ListAction::ToggleTodo {
        list_index,
        todo_index,
        completed: form.completed,
    };
    state.dispatch(&session, &context, action).await
}

/// `POST /lists/:id/complete_all`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed.
pub async fn complete_all(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    ListIndex(list_index): ListIndex,
) -> WebResult<Response> {
    state
        .dispatch(&session, &context, ListAction::CompleteAll { list_index })
        .await
}

/// `POST /lists/:id/todos/:todo_id/destroy`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed.
pub async fn destroy_todo(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    RequestedWith(responder): RequestedWith,
    TodoIndices(list_index, todo_index): TodoIndices,
) -> WebResult<Response> {
    let action = ListAction::DeleteTodo {
        list_index,
        todo_index,
        responder,
    };
    state.dispatch(&session, &context, action).await
}
