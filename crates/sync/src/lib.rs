//! Local-cache synchronization for the maipal companion client.
//!
//! The remote service is the source of truth for the song catalog and
//! the player's records. This crate keeps two local copies of each: the
//! raw JSON payload in the key-value store, and a relational projection
//! in the song/chart/record tables. A per-category date marker decides
//! when the remote copy is refetched.

pub mod coordinator;
pub mod error;
pub mod keys;
pub mod mapping;
pub mod source;

pub use coordinator::{SyncCategory, SyncCoordinator, SyncState};
pub use error::SyncError;
pub use source::ScoreSource;
