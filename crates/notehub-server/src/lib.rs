//! notehub-server: HTTP API server for notehub
//!
//! This crate provides:
//! - REST API endpoints for registration, login, and note CRUD
//! - Note sharing and keyword search
//! - Opaque bearer-token authentication
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use notehub_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(store, config);
//! let app = routes::build_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notehub_core;
pub use notehub_store;
