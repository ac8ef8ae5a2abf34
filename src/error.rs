//! Unified chart error types.

use crate::shared::Range;
use thiserror::Error;

/// Top-level chart error.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Invalid price {value:?} at {range}[{index}]")]
    InvalidPrice {
        range: Range,
        index: usize,
        value: String,
    },

    #[error("Invalid timestamp at {range}[{index}]")]
    InvalidTimestamp { range: Range, index: usize },

    #[error("No price points for range {0}")]
    EmptySeries(Range),

    #[error("Unknown rank: {0}")]
    UnknownRank(u8),

    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors from reading SVG path data into a blendable path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Invalid path data: {0}")]
    Syntax(String),

    #[error("Path must start with a moveto")]
    MissingMoveTo,
}
