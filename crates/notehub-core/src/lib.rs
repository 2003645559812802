//! notehub-core: Core types for the notehub API
//!
//! This crate provides:
//! - Typed identifiers (`UserId`, `NoteId`)
//! - Domain types for users and notes as exposed over the API
//! - The search-relevance ranking used by the `/search` endpoint
//!
//! No I/O happens here; the storage and HTTP layers build on these types.

pub mod rank;
pub mod types;

pub use rank::{query_terms, rank_by_relevance, relevance_score};
pub use types::{Note, NoteId, User, UserId};
