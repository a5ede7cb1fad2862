//! Combined song + charts search shapes.

use serde::Serialize;

use crate::models::chart::ChartRow;
use crate::models::song::SongRow;

/// A song hydrated with all of its chart rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongWithCharts {
    pub song: SongRow,
    pub charts: Vec<ChartRow>,
}

/// Catalog search filter. Every absent field means "unrestricted".
#[derive(Debug, Clone, Default)]
pub struct SongSearchFilter {
    /// Substring match on the song title.
    pub title: Option<String>,
    /// Inclusive lower bound on the difficulty constant of at least one chart.
    pub min_ds: Option<f64>,
    /// Inclusive upper bound on the difficulty constant of at least one chart.
    pub max_ds: Option<f64>,
    /// Exact match on the origin version tag.
    pub version: Option<String>,
}
