//! Request-time auth token injection.
//!
//! Outgoing request URLs are matched against a small allow-list of path
//! fragments that require authentication. Matches get the last-known
//! session token from the key-value store; a missing or unreadable token
//! sends the request unauthenticated rather than failing closed.

use sqlx::SqlitePool;

use maipal_db::KvStore;

/// KV key for the current user's login name.
pub const CURRENT_USER_USERNAME: &str = "current_user_username";
/// KV key for the current session token.
pub const CURRENT_USER_JWT: &str = "current_user_jwt";
/// KV key for the current user's display nickname.
pub const CURRENT_USER_NICKNAME: &str = "current_user_nickname";

/// Path fragments whose requests carry the bearer token.
const AUTH_PATHS: &[&str] = &["player/"];

/// Whether a request to `url` should carry the bearer token.
pub(crate) fn requires_auth(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    AUTH_PATHS.iter().any(|path| lower.contains(path))
}

/// The stored session token, or `None` (with a log line) when absent or
/// unreadable.
pub(crate) async fn stored_token(pool: &SqlitePool) -> Option<String> {
    match KvStore::get(pool, CURRENT_USER_JWT).await {
        Ok(token) => token.filter(|t| !t.is_empty()),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Failed to read stored session token, sending request unauthenticated",
            );
            None
        }
    }
}
