//! Remote access layer for the maipal companion client.
//!
//! Wraps the scoring service's HTTP API ([`ScoreApiClient`]) and the
//! cross-device login QR page scrape ([`QrScraper`]). All calls normalize
//! transport failures, non-success statuses, and decode failures into
//! [`ClientError`] variants.

pub mod api;
pub mod auth;
pub mod error;
pub mod models;
pub mod qr;

pub use api::ScoreApiClient;
pub use error::ClientError;
pub use qr::QrScraper;
