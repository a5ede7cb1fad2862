//! Seam between the coordinator and the remote service.

use async_trait::async_trait;

use maipal_client::models::{PlayerRecord, Song};
use maipal_client::{ClientError, ScoreApiClient};

/// Where fresh catalog and record payloads come from.
///
/// The production implementation is [`ScoreApiClient`]; tests substitute
/// a scripted source.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    async fn music_data(&self) -> Result<Vec<Song>, ClientError>;
    async fn player_records(&self) -> Result<PlayerRecord, ClientError>;
}

#[async_trait]
impl ScoreSource for ScoreApiClient {
    async fn music_data(&self) -> Result<Vec<Song>, ClientError> {
        ScoreApiClient::music_data(self).await
    }

    async fn player_records(&self) -> Result<PlayerRecord, ClientError> {
        ScoreApiClient::player_records(self).await
    }
}
