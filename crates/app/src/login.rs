//! Login flow.

use sqlx::SqlitePool;

use maipal_client::auth::{CURRENT_USER_JWT, CURRENT_USER_NICKNAME, CURRENT_USER_USERNAME};
use maipal_client::models::LoginOutcome;
use maipal_client::ScoreApiClient;
use maipal_core::CoreError;
use maipal_db::models::NewUserProfile;
use maipal_db::{KvStore, UserRepo};

/// Progress of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginState {
    Idle,
    Loading,
    Success(LoginOutcome),
    Error(String),
}

/// Validate, log in remotely, and persist the session locally.
///
/// A failed local persist is logged but does not fail the login; the
/// remote session is already established at that point.
pub async fn attempt_login(
    pool: &SqlitePool,
    client: &ScoreApiClient,
    username: &str,
    password: &str,
) -> LoginState {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        let err = CoreError::Validation("username and password must not be blank".to_owned());
        return LoginState::Error(err.to_string());
    }

    match client.login(username, password).await {
        Ok(outcome) => {
            if let Err(e) = persist_session(pool, username, &outcome).await {
                tracing::warn!(error = %e, "Login succeeded but session persist failed");
            }
            LoginState::Success(outcome)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
            LoginState::Error(e.to_string())
        }
    }
}

/// Write the KV identity triple and the user-profile row.
///
/// The display nickname starts as the username; a later record fetch
/// carries the real one.
async fn persist_session(
    pool: &SqlitePool,
    username: &str,
    outcome: &LoginOutcome,
) -> Result<(), sqlx::Error> {
    KvStore::put(pool, CURRENT_USER_USERNAME, username).await?;
    KvStore::put(pool, CURRENT_USER_JWT, &outcome.token).await?;
    KvStore::put(pool, CURRENT_USER_NICKNAME, username).await?;

    UserRepo::upsert(
        pool,
        &NewUserProfile {
            username: username.to_owned(),
            auth_token: outcome.token.clone(),
            nickname: Some(username.to_owned()),
        },
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        maipal_db::MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn persist_session_writes_identity_triple_and_profile() {
        let pool = test_pool().await;
        let outcome = LoginOutcome {
            token: "jwt=abc123".to_owned(),
            message: None,
        };

        persist_session(&pool, "alice", &outcome).await.unwrap();

        assert_eq!(
            KvStore::get(&pool, CURRENT_USER_USERNAME).await.unwrap().as_deref(),
            Some("alice")
        );
        assert_eq!(
            KvStore::get(&pool, CURRENT_USER_JWT).await.unwrap().as_deref(),
            Some("jwt=abc123")
        );
        assert_eq!(
            KvStore::get(&pool, CURRENT_USER_NICKNAME).await.unwrap().as_deref(),
            Some("alice")
        );

        let profile = UserRepo::find_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(profile.auth_token, "jwt=abc123");
        assert_eq!(profile.nickname.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn relogin_replaces_the_stored_session() {
        let pool = test_pool().await;
        let first = LoginOutcome {
            token: "jwt=one".to_owned(),
            message: None,
        };
        let second = LoginOutcome {
            token: "jwt=two".to_owned(),
            message: None,
        };

        persist_session(&pool, "alice", &first).await.unwrap();
        persist_session(&pool, "alice", &second).await.unwrap();

        assert_eq!(
            KvStore::get(&pool, CURRENT_USER_JWT).await.unwrap().as_deref(),
            Some("jwt=two")
        );
        let profile = UserRepo::find_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(profile.auth_token, "jwt=two");
    }

    #[tokio::test]
    async fn blank_credentials_never_reach_the_network() {
        let pool = test_pool().await;
        let client = ScoreApiClient::new("http://unreachable.invalid/", pool.clone()).unwrap();

        let state = attempt_login(&pool, &client, "  ", "secret").await;
        assert!(matches!(state, LoginState::Error(_)));

        let state = attempt_login(&pool, &client, "alice", "").await;
        assert!(matches!(state, LoginState::Error(_)));
    }
}
