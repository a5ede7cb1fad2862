//! Row structs and DTOs for the local cache tables.
//!
//! Each submodule contains a `FromRow` entity struct matching the table row
//! and, where inserts need a caller-supplied shape, a create DTO without the
//! surrogate id.

pub mod chart;
pub mod record;
pub mod search;
pub mod song;
pub mod user;

pub use chart::{ChartRow, NewChart};
pub use record::{NewRecord, RecordRow};
pub use search::{SongSearchFilter, SongWithCharts};
pub use song::SongRow;
pub use user::{NewUserProfile, UserProfileRow};
