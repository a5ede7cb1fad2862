use maipal_client::{QrScraper, ScoreApiClient};
use maipal_db::DbPool;
use maipal_sync::SyncCoordinator;

use crate::config::AppConfig;

/// Everything the flows need, built once and shared.
///
/// Construction is explicit: the pool, client, scraper, and coordinator
/// are wired here and nowhere else.
pub struct AppContext {
    pub pool: DbPool,
    pub client: ScoreApiClient,
    pub qr: QrScraper,
    pub sync: SyncCoordinator<ScoreApiClient>,
}

impl AppContext {
    /// Open (creating if needed) the database, run migrations, and wire
    /// up the remote clients.
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = maipal_db::connect(&config.database_url).await?;
        let client = ScoreApiClient::new(config.api_base_url.clone(), pool.clone())?;
        let qr = QrScraper::new(
            config.qr_page_base_url.clone(),
            config.qr_image_base_url.clone(),
        )?;
        let sync = SyncCoordinator::new(pool.clone(), client.clone());

        tracing::info!(database_url = %config.database_url, "Application context ready");
        Ok(Self {
            pool,
            client,
            qr,
            sync,
        })
    }
}
