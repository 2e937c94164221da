//! Core traits for betchat abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{BrandIdentity, ResolvedMention, UserIdentity};

/// Batched read capability over the two identity namespaces.
///
/// Implementations must answer each call with a single batched query:
/// "fetch identity records whose handle is in the given set". The mention
/// resolver relies on this to issue exactly two queries per text body,
/// never one per token.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Fetch user identities whose username is in `handles` (exact,
    /// case-sensitive match).
    async fn users_by_handles(&self, handles: &[String]) -> Result<Vec<UserIdentity>>;

    /// Fetch brand identities whose slug is in `handles` (exact,
    /// case-sensitive match).
    async fn brands_by_handles(&self, handles: &[String]) -> Result<Vec<BrandIdentity>>;
}

/// Write capability for mention association rows.
#[async_trait]
pub trait MentionStore: Send + Sync {
    /// Insert one association row per resolved mention, each linking the
    /// owning comment to either a user or a brand identity.
    async fn insert_for_comment(
        &self,
        comment_id: Uuid,
        mentions: &[ResolvedMention],
    ) -> Result<()>;
}
