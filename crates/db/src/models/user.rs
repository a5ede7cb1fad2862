//! User profile entity.

use maipal_core::types::DbId;
use sqlx::FromRow;

/// The single locally-known user row from the `user_profiles` table.
///
/// Contains the session token -- never log this struct wholesale.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserProfileRow {
    pub id: DbId,
    pub username: String,
    pub auth_token: String,
    pub nickname: Option<String>,
}

/// Insert shape for the profile row (replaces any conflicting row).
#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub username: String,
    pub auth_token: String,
    pub nickname: Option<String>,
}
