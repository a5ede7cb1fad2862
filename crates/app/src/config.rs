use maipal_client::api::DEFAULT_BASE_URL;
use maipal_client::qr::{DEFAULT_QR_IMAGE_BASE_URL, DEFAULT_QR_PAGE_BASE_URL};

/// Runtime configuration, read from the environment with defaults that
/// work out of the box.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub api_base_url: String,
    pub qr_page_base_url: String,
    pub qr_image_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("MAIPAL_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:maipal.db".to_owned()),
            api_base_url: std::env::var("MAIPAL_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            qr_page_base_url: std::env::var("MAIPAL_QR_PAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_QR_PAGE_BASE_URL.to_owned()),
            qr_image_base_url: std::env::var("MAIPAL_QR_IMAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_QR_IMAGE_BASE_URL.to_owned()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
