//! Mention extraction, resolution, rendering, and persistence.
//!
//! This module implements the full mention pipeline for free-text bodies
//! (comments, post content): scan for `@name` tokens, resolve them against
//! the user and brand namespaces, render them back as anchor markup, and
//! write the derived association rows.
//!
//! # Rules
//!
//! 1. A mention token is `@` followed by one or more word characters or
//!    hyphens; matching is non-overlapping, leftmost-first
//! 2. Tokens are case-sensitive and deduplicated before resolution,
//!    preserving first-seen order
//! 3. Resolution issues exactly two batched lookups (one per namespace),
//!    never one per token
//! 4. Tokens with no match in either namespace are silently dropped
//! 5. A handle present in both namespaces yields both resolved records;
//!    rendering picks the first entry in the resolved list (users come
//!    before brands, so the user record wins)
//! 6. Rendering never omits a link: an unresolved token defaults to a
//!    user-profile link
//! 7. Rendering is NOT idempotent — the inserted anchor text contains a
//!    literal `@handle`, so re-rendering rendered output nests anchors.
//!    Render exactly once per source text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;
use tracing::{debug, error};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{MentionKind, MentionWriteOutcome, ResolvedMention};
use crate::traits::{IdentityDirectory, MentionStore};

/// Utility classes applied to every rendered mention anchor.
pub const MENTION_LINK_CLASS: &str = "text-primary hover:underline font-semibold";

/// `@` followed by word characters or hyphens; the capture excludes the `@`.
static MENTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([\w-]+)").expect("mention pattern is valid"));

/// Extract candidate mention tokens from text.
///
/// Returns the handle portion of each `@handle` match, deduplicated by
/// exact string equality with first-seen order preserved. Empty or
/// mention-free text yields an empty vector.
///
/// # Examples
///
/// ```
/// use betchat_core::mentions::extract_mentions;
///
/// let tokens = extract_mentions("hello @alice and @bob-2");
/// assert_eq!(tokens, vec!["alice".to_string(), "bob-2".to_string()]);
/// ```
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for cap in MENTION_PATTERN.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            if seen.insert(name.as_str()) {
                tokens.push(name.as_str().to_string());
            }
        }
    }

    tokens
}

/// Resolve candidate tokens against both identity namespaces.
///
/// Issues exactly two batched lookups — one per namespace — concurrently,
/// regardless of how many candidates there are. The result is every user
/// match followed by every brand match; unresolvable tokens produce no
/// record and no error. If either lookup fails the whole resolution fails
/// (no partial results, so callers never link only half the mentions).
pub async fn resolve_mentions<D>(
    candidates: &[String],
    directory: &D,
) -> Result<Vec<ResolvedMention>>
where
    D: IdentityDirectory + ?Sized,
{
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let (users, brands) = tokio::try_join!(
        directory.users_by_handles(candidates),
        directory.brands_by_handles(candidates),
    )?;

    let mut mentions = Vec::with_capacity(users.len() + brands.len());
    mentions.extend(
        users
            .into_iter()
            .map(|u| ResolvedMention::user(u.username, u.id)),
    );
    mentions.extend(
        brands
            .into_iter()
            .map(|b| ResolvedMention::brand(b.slug, b.id)),
    );

    debug!(
        subsystem = "mentions",
        component = "resolver",
        op = "resolve",
        candidate_count = candidates.len(),
        resolved_count = mentions.len(),
        "Resolved mention candidates"
    );

    Ok(mentions)
}

/// Extract and resolve all mentions in one step.
pub async fn parse_mentions<D>(text: &str, directory: &D) -> Result<Vec<ResolvedMention>>
where
    D: IdentityDirectory + ?Sized,
{
    let candidates = extract_mentions(text);
    resolve_mentions(&candidates, directory).await
}

/// Render text with each `@handle` replaced by an anchor element.
///
/// With resolved mentions supplied, a brand mention links to the brand
/// root (`/slug`) and a user mention to the user profile (`/u/username`).
/// When several resolved entries share a token the first one in the list
/// determines the link. Without a resolved entry (or with no list at all)
/// every mention optimistically links to `/u/handle`, whether or not such
/// a user exists.
///
/// Single non-recursive pass; non-mention characters pass through
/// unchanged. Never call this on already-rendered output (rule 7 above).
pub fn render_mentions(text: &str, mentions: Option<&[ResolvedMention]>) -> String {
    MENTION_PATTERN
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let resolved = mentions.and_then(|ms| ms.iter().find(|m| m.token == name));

            let href = match resolved {
                Some(m) if m.kind == MentionKind::Brand => format!("/{name}"),
                _ => format!("/u/{name}"),
            };

            format!(r#"<a href="{href}" class="{MENTION_LINK_CLASS}">@{name}</a>"#)
        })
        .into_owned()
}

/// Best-effort write of mention association rows for a comment.
///
/// Issues no write for an empty list. A store failure is logged and
/// reported through [`MentionWriteOutcome`] but never propagated: the
/// caller's primary operation (e.g. comment creation) must not be aborted
/// by a failed mention write. At-most-once, no retries.
pub async fn persist_mentions<S>(
    comment_id: Uuid,
    mentions: &[ResolvedMention],
    store: &S,
) -> MentionWriteOutcome
where
    S: MentionStore + ?Sized,
{
    if mentions.is_empty() {
        return MentionWriteOutcome::Written(0);
    }

    match store.insert_for_comment(comment_id, mentions).await {
        Ok(()) => {
            debug!(
                subsystem = "mentions",
                component = "persist",
                op = "insert_for_comment",
                comment_id = %comment_id,
                mention_count = mentions.len(),
                "Wrote mention rows"
            );
            MentionWriteOutcome::Written(mentions.len())
        }
        Err(e) => {
            error!(
                subsystem = "mentions",
                component = "persist",
                op = "insert_for_comment",
                comment_id = %comment_id,
                mention_count = mentions.len(),
                error = %e,
                "Failed to write mention rows"
            );
            MentionWriteOutcome::Failed
        }
    }
}
