//! Custom Axum extractors.
//!
//! - `RequestedWith`: whether the request came from a script or a form
//! - `ListIndex` / `TodoIndices`: raw index path segments
//! - `HtmlForm`: form bodies with HTML error pages on rejection

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Form,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use todo_lists_core::Responder;

/// Header set by scripted requests.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

/// How the client wants a delete answered.
///
/// Requests carrying `X-Requested-With: XMLHttpRequest` are programmatic and
/// get a bare status; everything else is a page request.
///
/// # Example
///
/// ```ignore
/// async fn handler(RequestedWith(responder): RequestedWith) -> String {
///     format!("{responder:?}")
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestedWith(pub Responder);

#[async_trait]
impl<S> FromRequestParts<S> for RequestedWith
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let programmatic = parts
            .headers
            .get(REQUESTED_WITH_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"));

        Ok(Self(if programmatic {
            Responder::Programmatic
        } else {
            Responder::Page
        }))
    }
}

/// List index segment of `/lists/:id/...`, undecoded if it is not UTF-8.
///
/// Handlers never reject a path: an index that cannot be decoded is passed
/// on as written and fails index validation like any other bad index.
#[derive(Debug, Clone)]
pub struct ListIndex(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ListIndex
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(list_index)) => Ok(Self(list_index)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Using raw list index");
                Ok(Self(raw_segment(parts, 1)))
            }
        }
    }
}

/// List and todo index segments of `/lists/:id/todos/:todo_id/...`.
///
/// Same fallback as [`ListIndex`].
#[derive(Debug, Clone)]
pub struct TodoIndices(pub String, pub String);

#[async_trait]
impl<S> FromRequestParts<S> for TodoIndices
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<(String, String)>::from_request_parts(parts, state).await {
            Ok(Path((list_index, todo_index))) => Ok(Self(list_index, todo_index)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Using raw todo indices");
                Ok(Self(raw_segment(parts, 1), raw_segment(parts, 3)))
            }
        }
    }
}

fn raw_segment(parts: &Parts, position: usize) -> String {
    parts
        .uri
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .nth(position)
        .unwrap_or_default()
        .to_string()
}

/// URL-encoded form body whose rejections render as an [`AppError`] page.
///
/// # Example
///
/// ```ignore
/// async fn handler(HtmlForm(form): HtmlForm<ListForm>) -> String {
///     form.list_name
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for HtmlForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => Err(form_error(&rejection)),
        }
    }
}

fn form_error(rejection: &FormRejection) -> AppError {
    tracing::debug!(%rejection, "Form rejected");
    AppError::new(rejection.status(), rejection.body_text(), "INVALID_FORM")
}
