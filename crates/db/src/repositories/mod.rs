//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod chart_repo;
pub mod kv_store;
pub mod record_repo;
pub mod song_repo;
pub mod song_search_repo;
pub mod user_repo;

pub use chart_repo::ChartRepo;
pub use kv_store::KvStore;
pub use record_repo::RecordRepo;
pub use song_repo::SongRepo;
pub use song_search_repo::SongSearchRepo;
pub use user_repo::UserRepo;
