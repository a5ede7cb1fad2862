//! Repository for the single-row `user_profiles` table.

use sqlx::SqlitePool;

use crate::models::user::{NewUserProfile, UserProfileRow};

const COLUMNS: &str = "id, username, auth_token, nickname";

/// Provides access to the locally-known user profile.
pub struct UserRepo;

impl UserRepo {
    /// Insert the profile, replacing any row that conflicts on the unique
    /// username or token. `INSERT OR REPLACE` rather than a targeted
    /// `ON CONFLICT` clause because either constraint may fire.
    pub async fn upsert(
        pool: &SqlitePool,
        profile: &NewUserProfile,
    ) -> Result<UserProfileRow, sqlx::Error> {
        let query = format!(
            "INSERT OR REPLACE INTO user_profiles (username, auth_token, nickname)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfileRow>(&query)
            .bind(&profile.username)
            .bind(&profile.auth_token)
            .bind(&profile.nickname)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by username (case-sensitive).
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<UserProfileRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE username = ? LIMIT 1");
        sqlx::query_as::<_, UserProfileRow>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
