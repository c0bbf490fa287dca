//! List pages.
//!
//! Every handler turns its request into a [`ListAction`] and hands it to
//! [`AppState::dispatch`]. Path segments are passed through unparsed, and
//! undecodable ones raw; index validation happens in the reducer.

use crate::WebResult;
use crate::extractors::{HtmlForm, ListIndex, RequestedWith};
use crate::middleware::RequestContext;
use crate::session::CookieSession;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Redirect, Response},
};
use serde::Deserialize;
use todo_lists_core::{paths, ListAction};

/// Form submitted when creating or renaming a list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListForm {
    /// Requested list name, untrimmed.
    pub list_name: String,
}

/// `GET /`
#[allow(clippy::unused_async)]
pub async fn root() -> Redirect {
    Redirect::to(paths::LISTS)
}

/// `GET /lists`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed.
pub async fn list_lists(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
) -> WebResult<Response> {
    state.dispatch(&session, &context, ListAction::ListLists).await
}

/// `GET /lists/new`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed.
pub async fn new_list(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
) -> WebResult<Response> {
    state.dispatch(&session, &context, ListAction::NewList).await
}

/// `POST /lists`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed or the form
/// body is rejected.
pub async fn create_list(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    HtmlForm(form): HtmlForm<ListForm>,
) -> WebResult<Response> {
    let action = ListAction::CreateList {
        name: form.list_name,
    };
    state.dispatch(&session, &context, action).await
}

/// `GET /lists/:id`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed.
pub async fn view_list(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    ListIndex(list_index): ListIndex,
) -> WebResult<Response> {
    state
        .dispatch(&session, &context, ListAction::ViewList { list_index })
        .await
}

/// `GET /lists/:id/edit`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed.
pub async fn edit_list(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    ListIndex(list_index): ListIndex,
) -> WebResult<Response> {
    state
        .dispatch(&session, &context, ListAction::EditList { list_index })
        .await
}

/// `POST /lists/:id`
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed or the form
/// body is rejected.
pub async fn rename_list(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    ListIndex(list_index): ListIndex,
    HtmlForm(form): HtmlForm<ListForm>,
) -> WebResult<Response> {
    let action = ListAction::RenameList {
        list_index,
        name: form.list_name,
    };
    state.dispatch(&session, &context, action).await
}

/// `POST /lists/:id/destroy`
///
/// Scripted requests get a bare `204`/`404`; form posts are redirected.
///
/// # Errors
///
/// Returns [`AppError`](crate::AppError) if the session cannot be accessed.
pub async fn destroy_list(
    State(state): State<AppState>,
    session: CookieSession,
    context: RequestContext,
    RequestedWith(responder): RequestedWith,
    ListIndex(list_index): ListIndex,
) -> WebResult<Response> {
    let action = ListAction::DeleteList {
        list_index,
        responder,
    };
    state.dispatch(&session, &context, action).await
}
