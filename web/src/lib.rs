//! Axum shell for the todo lists application.
//!
//! The pure list logic lives in `todo_lists_core`; this crate does the I/O
//! around it, in the "Functional Core, Imperative Shell" style.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from the path, form body and `X-Requested-With` header
//! 3. **Build Action** from the raw values
//! 4. **Dispatch** the action against the browser's session
//! 5. **Map the effect** to a page, a `303` redirect or a bare status
//! 6. **Save** the session and return the response
//!
//! # Example
//!
//! ```ignore
//! use todo_lists_web::{router, AppState, Config};
//!
//! let config = Config::from_env()?;
//! let app = router(AppState::new(config.lists.environment()), &config.session);
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use config::{Config, ConfigError};
pub use error::AppError;
pub use extractors::{HtmlForm, ListIndex, RequestedWith, TodoIndices};
pub use middleware::{request_context_layer, RequestContext, REQUEST_ID_HEADER};
pub use router::router;
pub use session::{CookieSession, SESSION_COOKIE};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
