//! Composition root for the maipal companion client.
//!
//! Embedding surfaces (a desktop shell, a TUI, integration tests) build
//! an [`AppContext`] once and drive the login, data-initialization, and
//! QR flows through it. Each flow reports progress as a small sum type
//! instead of raising; the embedder matches exhaustively and renders.

pub mod config;
pub mod context;
pub mod data_init;
pub mod login;
pub mod qr;
pub mod telemetry;

pub use config::AppConfig;
pub use context::AppContext;
pub use data_init::{DataInitState, DataSnapshot};
pub use login::LoginState;
pub use qr::QrState;
