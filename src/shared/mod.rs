//! Shared newtypes and utilities used across all domain modules.
//!
//! `Range` serializes identically to the keys of the price document, so it
//! can be used directly in wire types without conversion overhead.

pub mod cell;
pub mod fmt;
pub mod scaling;
pub mod serde_util;

pub use cell::SharedValue;
pub use scaling::LinearScale;

/// A position in viewport coordinates (y grows downward).
pub use kurbo::Point;

use serde::{Deserialize, Serialize};

/// Position of a range in the label row (`0` = 1H … `4` = all).
pub type Rank = u8;

// ─── Range ───────────────────────────────────────────────────────────────────

/// Time window a price series covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    #[default]
    Hour,
    Day,
    Month,
    Year,
    All,
}

impl Range {
    /// Every range in label order.
    pub const ALL: [Range; 5] = [Range::Hour, Range::Day, Range::Month, Range::Year, Range::All];

    /// Key used in the price document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    /// Text shown on the range's label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hour => "1H",
            Self::Day => "1D",
            Self::Month => "1M",
            Self::Year => "1Y",
            Self::All => "all",
        }
    }

    pub fn rank(&self) -> Rank {
        match self {
            Self::Hour => 0,
            Self::Day => 1,
            Self::Month => 2,
            Self::Year => 3,
            Self::All => 4,
        }
    }

    pub fn from_rank(rank: Rank) -> Option<Self> {
        Self::ALL.get(rank as usize).copied()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_ranks_follow_label_order() {
        for (i, range) in Range::ALL.iter().enumerate() {
            assert_eq!(range.rank() as usize, i);
            assert_eq!(Range::from_rank(i as Rank), Some(*range));
        }
        assert_eq!(Range::from_rank(5), None);
    }

    #[test]
    fn test_range_labels() {
        let labels: Vec<_> = Range::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["1H", "1D", "1M", "1Y", "all"]);
        assert_eq!(Range::from_label("1Y"), Some(Range::Year));
        assert_eq!(Range::from_label("1W"), None);
    }

    #[test]
    fn test_range_serde() {
        let json = serde_json::to_string(&Range::Month).unwrap();
        assert_eq!(json, "\"month\"");
        let back: Range = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, Range::All);
    }
}
