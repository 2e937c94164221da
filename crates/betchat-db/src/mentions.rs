//! Mention association row store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use betchat_core::{Error, MentionKind, MentionStore, ResolvedMention, Result};

/// PostgreSQL implementation of [`MentionStore`].
///
/// Writes one row per resolved mention into the `mentions` table. Exactly
/// one of `mentioned_user_id` / `mentioned_brand_id` is populated per row;
/// the other is NULL. All rows for one comment go in a single transaction.
///
/// This store reports write errors normally — the best-effort,
/// swallow-and-log policy lives in `betchat_core::persist_mentions`, so
/// the contract stays visible at the call site.
pub struct PgMentionStore {
    pool: Pool<Postgres>,
}

impl PgMentionStore {
    /// Create a new PgMentionStore with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MentionStore for PgMentionStore {
    async fn insert_for_comment(
        &self,
        comment_id: Uuid,
        mentions: &[ResolvedMention],
    ) -> Result<()> {
        if mentions.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        for mention in mentions {
            let (user_id, brand_id) = match mention.kind {
                MentionKind::User => (Some(mention.id), None),
                MentionKind::Brand => (None, Some(mention.id)),
            };

            sqlx::query(
                "INSERT INTO mentions (id, comment_id, mentioned_user_id, mentioned_brand_id, created_at)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(comment_id)
            .bind(user_id)
            .bind(brand_id)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;
        }

        tx.commit().await.map_err(Error::Database)?;
        Ok(())
    }
}
