use maipal_client::ClientError;

/// Errors produced while refreshing or reading the local cache.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The remote fetch failed.
    #[error("remote fetch failed: {0}")]
    Remote(#[from] ClientError),

    /// A local database operation failed.
    #[error("local storage failed: {0}")]
    Storage(#[from] sqlx::Error),

    /// A cached payload could not be decoded.
    #[error("cached payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// No cached payload exists for the requested category.
    #[error("no local data cached for this category")]
    NoLocalData,
}
