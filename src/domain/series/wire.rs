//! Wire types for the static price document.
//!
//! Shape: `{ data: { prices: { latest?, hour|day|month|year|all: { percent_change?, prices: [[price, t], ...] } } } }`

use crate::shared::serde_util;
use serde::Deserialize;

/// Top-level document.
#[derive(Deserialize, Debug, Clone)]
pub struct PriceDocument {
    pub data: PriceData,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PriceData {
    pub prices: Prices,
}

/// Per-range price lists.
#[derive(Deserialize, Debug, Clone)]
pub struct Prices {
    #[serde(default)]
    pub latest: Option<String>,
    pub hour: DataPoints,
    pub day: DataPoints,
    pub month: DataPoints,
    pub year: DataPoints,
    pub all: DataPoints,
}

/// Raw series for one range. Prices arrive as decimal strings.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DataPoints {
    #[serde(default)]
    pub percent_change: Option<f64>,
    #[serde(deserialize_with = "serde_util::price_pair::deserialize")]
    pub prices: Vec<(String, f64)>,
}
