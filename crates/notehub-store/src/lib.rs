//! notehub-store: Storage layer for the notehub API
//!
//! This crate provides:
//! - PostgreSQL storage for users, tokens, notes, and shares
//! - Migration management (embedded, idempotent SQL)
//! - Type-safe database operations via sqlx
//! - The `NoteAccess` controller enforcing ownership-scoped visibility,
//!   mutation, sharing, and search independent of transport
//!
//! # Usage
//!
//! ```rust,ignore
//! use notehub_store::{NoteAccess, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let access = NoteAccess::new(&store);
//! let notes = access.list(caller).await?;
//! ```

pub mod access;
pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use access::{AccessError, AccessResult, NoteAccess};
pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig};

// Re-export notehub-core for downstream crates
pub use notehub_core;
