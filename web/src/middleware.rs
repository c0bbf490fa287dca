//! Request context middleware.
//!
//! Every request gets an id, taken from a valid `X-Request-ID` header or
//! freshly generated, and an `http_request` span wrapping the handler. Both
//! travel to the handler as a [`RequestContext`], which dispatch uses to stamp
//! the reduced action and its outcome onto the span. The id is echoed back in
//! the response header.
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/lists", get(list_lists))
//!     .layer(request_context_layer());
//! ```

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderValue},
    response::Response,
};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{field, Instrument, Span};
use uuid::Uuid;

/// Header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Per-request id and span.
///
/// Extracted in handlers and passed to
/// [`AppState::dispatch`](crate::AppState::dispatch).
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Id used to correlate log lines of one request.
    pub id: Uuid,
    /// The `http_request` span, or a disabled span outside the middleware.
    pub span: Span,
}

impl RequestContext {
    /// Context with no span to record on.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            span: Span::none(),
        }
    }

    /// Records which action ran and how it ended.
    ///
    /// `outcome` is the effect kind, or `"error"`.
    pub fn record_outcome(&self, action: &'static str, outcome: &'static str) {
        self.span.record("action", action);
        self.span.record("outcome", outcome);
    }
}

fn header_id(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(context) = parts.extensions.get::<Self>() {
            return Ok(context.clone());
        }
        Ok(Self::new(header_id(parts).unwrap_or_else(Uuid::new_v4)))
    }
}

/// Create a layer that opens a [`RequestContext`] for every request.
#[must_use]
pub const fn request_context_layer() -> RequestContextLayer {
    RequestContextLayer
}

/// Layer installing [`RequestContextMiddleware`].
#[derive(Clone, Debug)]
pub struct RequestContextLayer;

impl<S> Layer<S> for RequestContextLayer {
    type Service = RequestContextMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestContextMiddleware { inner }
    }
}

/// Middleware service that opens the request span and echoes the id.
#[derive(Clone, Debug)]
pub struct RequestContextMiddleware<S> {
    inner: S,
}

impl<S> Service<Request> for RequestContextMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let (mut parts, body) = req.into_parts();
        let id = header_id(&parts).unwrap_or_else(Uuid::new_v4);

        let span = tracing::info_span!(
            "http_request",
            request_id = %id,
            method = %parts.method,
            path = %parts.uri.path(),
            action = field::Empty,
            outcome = field::Empty,
        );
        parts.extensions.insert(RequestContext {
            id,
            span: span.clone(),
        });

        let fut = self.inner.call(Request::from_parts(parts, body));

        Box::pin(async move {
            let mut response = fut.instrument(span).await?;

            if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
                response.headers_mut().insert(REQUEST_ID_HEADER, value);
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing_subscriber::layer::SubscriberExt;

    /// Collects every value recorded on a span after creation.
    struct Recorded(Arc<Mutex<Vec<String>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Recorded {
        fn on_record(
            &self,
            _id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            struct Visitor<'a>(&'a mut Vec<String>);

            impl field::Visit for Visitor<'_> {
                fn record_str(&mut self, field: &field::Field, value: &str) {
                    self.0.push(format!("{}={value}", field.name()));
                }

                fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
                    self.0.push(format!("{}={value:?}", field.name()));
                }
            }

            values.record(&mut Visitor(&mut self.0.lock().unwrap()));
        }
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/ping",
                get(|context: RequestContext| async move {
                    context.record_outcome("ping", "render");
                    context.id.to_string()
                }),
            )
            .layer(request_context_layer())
    }

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn generated_id_reaches_handler_and_header() {
        let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        let header = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .expect("Request ID header should be present")
            .to_str()
            .unwrap()
            .to_string();
        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(body(response).await, header);
    }

    #[tokio::test]
    async fn outcome_is_recorded_on_request_span() {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(Recorded(Arc::clone(&recorded)));
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();
        app().oneshot(request).await.unwrap();

        let recorded = recorded.lock().unwrap();
        assert!(recorded.contains(&"action=ping".to_string()));
        assert!(recorded.contains(&"outcome=render".to_string()));
    }

    #[tokio::test]
    async fn valid_header_id_is_kept() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .uri("/ping")
            .header(REQUEST_ID_HEADER, id.to_string())
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], id.to_string());
        assert_eq!(body(response).await, id.to_string());
    }

    #[tokio::test]
    async fn invalid_header_id_is_replaced() {
        let request = Request::builder()
            .uri("/ping")
            .header(REQUEST_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_ne!(header, "not-a-uuid");
        assert!(Uuid::parse_str(header).is_ok());
    }

    #[tokio::test]
    async fn extension_wins_over_header() {
        let id = Uuid::new_v4();
        let mut request = Request::builder()
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .body(())
            .unwrap();
        request.extensions_mut().insert(RequestContext::new(id));

        let (mut parts, ()) = request.into_parts();
        let context = RequestContext::from_request_parts(&mut parts, &())
            .await
            .expect("Should extract");

        assert_eq!(context.id, id);
    }

    #[tokio::test]
    async fn header_used_without_middleware() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, id.to_string())
            .body(())
            .unwrap();

        let (mut parts, ()) = request.into_parts();
        let context = RequestContext::from_request_parts(&mut parts, &())
            .await
            .expect("Should extract");

        assert_eq!(context.id, id);
        assert!(context.span.is_none());
    }
}
