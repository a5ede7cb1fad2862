//! Difficulty tiers for charts.
//!
//! The five standard tiers map one-to-one onto the remote catalog's
//! per-song chart indices 0..4. The two Utage tiers are reserved for
//! banquet-hall (`宴会場`) party tracks, which carry one or two charts
//! outside the standard ladder.

use serde::{Deserialize, Serialize};

/// Ordered difficulty enumeration, stored as TEXT in the local database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Basic,
    Advanced,
    Expert,
    Master,
    ReMaster,
    Utage,
    Utage2p,
}

/// The five standard tiers, in remote chart-index order.
pub const STANDARD_TIERS: [Difficulty; 5] = [
    Difficulty::Basic,
    Difficulty::Advanced,
    Difficulty::Expert,
    Difficulty::Master,
    Difficulty::ReMaster,
];

impl Difficulty {
    /// Position in the canonical tier ordering (standard tiers first,
    /// then the Utage specials). Used to restore the remote chart order
    /// when reading rows back out of the database.
    pub fn order_index(self) -> usize {
        match self {
            Difficulty::Basic => 0,
            Difficulty::Advanced => 1,
            Difficulty::Expert => 2,
            Difficulty::Master => 3,
            Difficulty::ReMaster => 4,
            Difficulty::Utage => 5,
            Difficulty::Utage2p => 6,
        }
    }

    /// Standard tier for a remote chart index, `None` for out-of-range
    /// indices (the catalog occasionally ships malformed extras).
    pub fn from_chart_index(index: usize) -> Option<Self> {
        STANDARD_TIERS.get(index).copied()
    }

    /// Human-readable tier name for list rendering.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
            Difficulty::Master => "Master",
            Difficulty::ReMaster => "Re:MASTER",
            Difficulty::Utage => "U·TA·GE",
            Difficulty::Utage2p => "U·TA·GE (2P)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_index_maps_standard_tiers_in_order() {
        assert_eq!(Difficulty::from_chart_index(0), Some(Difficulty::Basic));
        assert_eq!(Difficulty::from_chart_index(4), Some(Difficulty::ReMaster));
        assert_eq!(Difficulty::from_chart_index(5), None);
    }

    #[test]
    fn order_index_is_strictly_increasing_over_standard_tiers() {
        let indices: Vec<_> = STANDARD_TIERS.iter().map(|d| d.order_index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(Difficulty::Utage.order_index() > Difficulty::ReMaster.order_index());
    }
}
