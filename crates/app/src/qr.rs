//! QR display flow for cross-device login.

use sqlx::SqlitePool;

use maipal_client::qr::extract_mai_id_from_url;
use maipal_client::QrScraper;
use maipal_db::KvStore;

/// KV key for the remembered terminal id.
pub const MAI_ID_KEY: &str = "mai_id";

/// Progress of a QR fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum QrState {
    Idle,
    Loading,
    /// Absolute URL of the QR image to render.
    Success(String),
    Error(String),
}

/// Remember a scanned or entered mai-id for next time.
///
/// Pasted page URLs are reduced to the bare id first.
pub async fn remember_mai_id(pool: &SqlitePool, input: &str) -> Result<(), sqlx::Error> {
    let id = extract_mai_id_from_url(input.trim());
    KvStore::put(pool, MAI_ID_KEY, &id).await
}

/// Resolve the id to use, fetch its QR page, and return the image URL.
///
/// `entered` wins over the remembered id; an empty resolution is an
/// error state, not a fetch.
pub async fn fetch_qr_code(pool: &SqlitePool, scraper: &QrScraper, entered: &str) -> QrState {
    let entered = extract_mai_id_from_url(entered.trim());
    let mai_id = if entered.is_empty() {
        match KvStore::get(pool, MAI_ID_KEY).await {
            Ok(Some(stored)) if !stored.is_empty() => stored,
            Ok(_) => return QrState::Error("no mai-id entered or remembered".to_owned()),
            Err(e) => return QrState::Error(e.to_string()),
        }
    } else {
        entered
    };

    match scraper.fetch_image_url(&mai_id).await {
        Ok(url) => QrState::Success(url),
        Err(e) => {
            tracing::warn!(error = %e, "QR fetch failed");
            QrState::Error(e.to_string())
        }
    }
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
    async fn remember_reduces_page_urls_to_the_id() {
        let pool = test_pool().await;
        remember_mai_id(&pool, "http://wq.sys-allnet.cn/qrcode/req/MAID777.html")
            .await
            .unwrap();
        assert_eq!(
            KvStore::get(&pool, MAI_ID_KEY).await.unwrap().as_deref(),
            Some("MAID777")
        );
    }

    #[tokio::test]
    async fn empty_id_with_nothing_remembered_is_an_error() {
        let pool = test_pool().await;
        let scraper = QrScraper::new("http://unreachable.invalid/", "http://unreachable.invalid/")
            .unwrap();
        let state = fetch_qr_code(&pool, &scraper, "  ").await;
        assert!(matches!(state, QrState::Error(_)));
    }
}
