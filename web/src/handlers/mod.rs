//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by resource.

pub mod health;
pub mod lists;
pub mod todos;

// Re-export common handler utilities
pub use health::health_check;
