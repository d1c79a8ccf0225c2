//! Roster Server Library
//!
//! Minimal user CRUD REST API over `SQLite`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{LogFormat, ServerConfig};
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use state::AppState;
