//! Identity directory backed by the `profiles` and `brand_profiles` tables.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use betchat_core::{
    BrandIdentity, BrandProfile, Error, IdentityDirectory, Profile, Result, UserIdentity,
};

/// PostgreSQL implementation of [`IdentityDirectory`].
///
/// Both namespace lookups are single batched queries over the candidate
/// handle set; handles match by exact, case-sensitive equality, mirroring
/// the unique constraints on `profiles.username` and `brand_profiles.slug`.
pub struct PgIdentityDirectory {
    pool: Pool<Postgres>,
}

impl PgIdentityDirectory {
    /// Create a new PgIdentityDirectory with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Fetch a full user profile by username.
    pub async fn profile_by_username(&self, username: &str) -> Result<Option<Profile>> {
        let row = sqlx::query(
            "SELECT id, username, display_name, avatar_url, bio, country_code,
                    betting_interests, created_at, updated_at
             FROM profiles
             WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(|row| Profile {
            id: row.get("id"),
            username: row.get("username"),
            display_name: row.get("display_name"),
            avatar_url: row.get("avatar_url"),
            bio: row.get("bio"),
            country_code: row.get("country_code"),
            betting_interests: row.get("betting_interests"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }

    /// Fetch a full brand profile by slug.
    pub async fn brand_by_slug(&self, slug: &str) -> Result<Option<BrandProfile>> {
        let row = sqlx::query(
            "SELECT id, owner_id, brand_name, slug, logo_url, description,
                    website_url, is_verified, categories, follower_count,
                    created_at, updated_at
             FROM brand_profiles
             WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(|row| BrandProfile {
            id: row.get("id"),
            owner_id: row.get("owner_id"),
            brand_name: row.get("brand_name"),
            slug: row.get("slug"),
            logo_url: row.get("logo_url"),
            description: row.get("description"),
            website_url: row.get("website_url"),
            is_verified: row.get("is_verified"),
            categories: row.get("categories"),
            follower_count: row.get("follower_count"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }
}

#[async_trait]
impl IdentityDirectory for PgIdentityDirectory {
    async fn users_by_handles(&self, handles: &[String]) -> Result<Vec<UserIdentity>> {
        let rows = sqlx::query(
            "SELECT id, username
             FROM profiles
             WHERE username = ANY($1)",
        )
        .bind(handles)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        let users = rows
            .into_iter()
            .map(|row| UserIdentity {
                id: row.get("id"),
                username: row.get("username"),
            })
            .collect();

        Ok(users)
    }

    async fn brands_by_handles(&self, handles: &[String]) -> Result<Vec<BrandIdentity>> {
        let rows = sqlx::query(
            "SELECT id, slug
             FROM brand_profiles
             WHERE slug = ANY($1)",
        )
        .bind(handles)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        let brands = rows
            .into_iter()
            .map(|row| BrandIdentity {
                id: row.get("id"),
                slug: row.get("slug"),
            })
            .collect();

        Ok(brands)
    }
}
