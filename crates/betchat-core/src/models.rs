//! Core data models for betchat.
//!
//! These types are shared across all betchat crates and represent
//! the core domain entities consulted by the mention engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// IDENTITY TYPES
// =============================================================================

/// A user namespace entry: stable id plus unique, case-sensitive username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub username: String,
}

/// A brand namespace entry: stable id plus unique, case-sensitive slug.
///
/// The user and brand namespaces are independent: the same literal handle
/// may exist in both, and resolution returns both entries when it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub id: Uuid,
    pub slug: String,
}

/// Full user profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub country_code: Option<String>,
    pub betting_interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full brand profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandProfile {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub brand_name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub is_verified: bool,
    pub categories: Vec<String>,
    pub follower_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// MENTION TYPES
// =============================================================================

/// Which namespace a mention token resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    User,
    Brand,
}

/// A mention token bound to a concrete identity after lookup.
///
/// Constructed fresh on every resolve call; never cached or persisted by
/// the engine itself (callers may persist derived mention rows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMention {
    /// The handle as it appeared in the text, without the leading `@`.
    pub token: String,
    pub kind: MentionKind,
    /// Profile id for `kind = user`, brand id for `kind = brand`.
    pub id: Uuid,
}

impl ResolvedMention {
    pub fn user(token: impl Into<String>, id: Uuid) -> Self {
        Self {
            token: token.into(),
            kind: MentionKind::User,
            id,
        }
    }

    pub fn brand(token: impl Into<String>, id: Uuid) -> Self {
        Self {
            token: token.into(),
            kind: MentionKind::Brand,
            id,
        }
    }
}

/// Outcome of the best-effort mention write.
///
/// Persisting mention rows is fire-and-forget relative to the caller's
/// primary operation: a failed write is logged and reported here, but never
/// propagated as an error. Callers may inspect the outcome; none are
/// required to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionWriteOutcome {
    /// All rows written; carries the row count (0 for an empty list).
    Written(usize),
    /// The write failed; the error was logged and swallowed.
    Failed,
}

impl MentionWriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, MentionWriteOutcome::Written(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_kind_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&MentionKind::User).unwrap(),
            "\"user\""
        );
        assert_eq!(
            serde_json::to_string(&MentionKind::Brand).unwrap(),
            "\"brand\""
        );
        let kind: MentionKind = serde_json::from_str("\"brand\"").unwrap();
        assert_eq!(kind, MentionKind::Brand);
    }

    #[test]
    fn test_resolved_mention_constructors() {
        let id = Uuid::new_v4();
        let m = ResolvedMention::user("alice", id);
        assert_eq!(m.token, "alice");
        assert_eq!(m.kind, MentionKind::User);
        assert_eq!(m.id, id);

        let b = ResolvedMention::brand("acme", id);
        assert_eq!(b.kind, MentionKind::Brand);
    }

    #[test]
    fn test_write_outcome_is_written() {
        assert!(MentionWriteOutcome::Written(0).is_written());
        assert!(MentionWriteOutcome::Written(3).is_written());
        assert!(!MentionWriteOutcome::Failed.is_written());
    }
}
