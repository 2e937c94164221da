//! # betchat-db
//!
//! PostgreSQL data-access layer for the BetChat mention engine.
//!
//! This crate provides:
//! - Connection pool management
//! - [`PgIdentityDirectory`]: batched handle lookups over the `profiles`
//!   and `brand_profiles` tables
//! - [`PgMentionStore`]: mention association rows in the `mentions` table
//!
//! ## Example
//!
//! ```rust,ignore
//! use betchat_core::{parse_mentions, persist_mentions, render_mentions};
//! use betchat_db::{create_pool, PgIdentityDirectory, PgMentionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool("postgres://localhost/betchat").await?;
//!     let directory = PgIdentityDirectory::new(pool.clone());
//!     let store = PgMentionStore::new(pool);
//!
//!     let body = "great call @alice, @acme should see this";
//!     let mentions = parse_mentions(body, &directory).await?;
//!     let html = render_mentions(body, Some(&mentions));
//!
//!     // Best-effort: a failed write never aborts the comment itself.
//!     let _ = persist_mentions(comment_id, &mentions, &store).await;
//!
//!     println!("{html}");
//!     Ok(())
//! }
//! ```

pub mod identity;
pub mod mentions;
pub mod pool;

pub use identity::PgIdentityDirectory;
pub use mentions::PgMentionStore;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};

// Re-export core types
pub use betchat_core::*;
