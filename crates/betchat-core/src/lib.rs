//! # betchat-core
//!
//! Core types, traits, and the mention pipeline for BetChat.
//!
//! This crate provides the foundational data structures, the port traits
//! the database layer implements, and the pure text transforms of the
//! mention engine: extract `@name` tokens, resolve them against the user
//! and brand namespaces, render them as anchor markup, and persist the
//! derived association rows as a best-effort side effect.

pub mod error;
pub mod mentions;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use mentions::{
    extract_mentions, parse_mentions, persist_mentions, render_mentions, resolve_mentions,
    MENTION_LINK_CLASS,
};
pub use models::*;
pub use traits::*;
