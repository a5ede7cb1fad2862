//! HTTP client for the remote scoring service.

use std::time::Duration;

use sqlx::SqlitePool;

use crate::auth;
use crate::error::ClientError;
use crate::models::{LoginOutcome, LoginRequest, LoginResponse, PlayerRecord, Song};

/// Base URL of the public scoring service.
pub const DEFAULT_BASE_URL: &str = "https://www.diving-fish.com/api/maimaidxprober/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the scoring service API.
///
/// Requests to endpoints that need authentication pick up the stored
/// session token automatically, so callers never pass credentials except
/// at [`ScoreApiClient::login`].
#[derive(Debug, Clone)]
pub struct ScoreApiClient {
    http: reqwest::Client,
    base_url: String,
    pool: SqlitePool,
}

impl ScoreApiClient {
    pub fn new(base_url: impl Into<String>, pool: SqlitePool) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            pool,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `url`, attaching the stored session token when the path calls
    /// for it, and fail on non-success statuses.
    async fn get_authorized(&self, url: &str) -> Result<reqwest::Response, ClientError> {
        let mut request = self.http.get(url);
        if auth::requires_auth(url) {
            if let Some(token) = auth::stored_token(&self.pool).await {
                request = request.bearer_auth(token);
            }
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                context: url.to_owned(),
            });
        }
        Ok(response)
    }

    /// Fetch the full song catalog.
    pub async fn music_data(&self) -> Result<Vec<Song>, ClientError> {
        let url = self.endpoint("music_data");
        tracing::debug!(%url, "Fetching song catalog");
        let body = self.get_authorized(&url).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the logged-in player's full record set.
    pub async fn player_records(&self) -> Result<PlayerRecord, ClientError> {
        let url = self.endpoint("player/records");
        tracing::debug!(%url, "Fetching player records");
        let body = self.get_authorized(&url).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Log in with username and password.
    ///
    /// The session token travels in the `set-cookie` response header; a
    /// success status without that header is an error, not an empty token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ClientError> {
        let url = self.endpoint("login");
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                context: url,
            });
        }

        let token = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .ok_or(ClientError::MissingToken)?;

        let body: LoginResponse = response.json().await.unwrap_or_default();
        tracing::info!(username, "Login succeeded");
        Ok(LoginOutcome {
            token,
            message: body.message,
        })
    }
}
