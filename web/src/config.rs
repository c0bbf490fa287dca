//! Configuration management for the todo lists server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Call `dotenvy::dotenv()` first to pick up a local `.env` file.

use std::env;
use todo_lists_core::{ListsEnvironment, RenamePolicy};

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "todo_lists_web=info,tower_http=info";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `TODO_LISTS_RENAME_POLICY` holds an unknown value.
    #[error("Invalid TODO_LISTS_RENAME_POLICY {0:?}: expected \"exclude-self\" or \"strict\"")]
    InvalidRenamePolicy(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Session cookie configuration
    pub session: SessionConfig,
    /// List behavior configuration
    pub lists: ListsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log filter directives
    pub log_level: String,
    /// Whether to install the Prometheus recorder and serve `/metrics`
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4567,
            log_level: DEFAULT_LOG_FILTER.to_string(),
            metrics_enabled: true,
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Only send the session cookie over HTTPS
    pub secure_cookie: bool,
}

/// List behavior configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ListsConfig {
    /// Uniqueness rule applied when renaming a list
    pub rename_policy: RenamePolicy,
}

impl ListsConfig {
    /// Reducer environment for this configuration.
    #[must_use]
    pub const fn environment(&self) -> ListsEnvironment {
        ListsEnvironment::new(self.rename_policy)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds a value that cannot be
    /// ignored. Unparseable ports and flags fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let rename_policy = match lookup("TODO_LISTS_RENAME_POLICY") {
            Some(raw) => {
                RenamePolicy::parse(&raw).ok_or(ConfigError::InvalidRenamePolicy(raw))?
            }
            None => RenamePolicy::default(),
        };

        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or(defaults.host),
                port: lookup("PORT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
                metrics_enabled: lookup("TODO_LISTS_METRICS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.metrics_enabled),
            },
            session: SessionConfig {
                secure_cookie: lookup("TODO_LISTS_SECURE_COOKIE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
            lists: ListsConfig { rename_policy },
        })
    }

    /// `host:port` to bind the listener to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
