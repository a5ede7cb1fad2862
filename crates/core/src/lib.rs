//! Shared types for the maipal companion client.

pub mod difficulty;
pub mod error;
pub mod types;

pub use difficulty::Difficulty;
pub use error::CoreError;
