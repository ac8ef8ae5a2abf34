//! Price series domain: the static dataset grouped by time range.

pub mod convert;
pub mod wire;

use crate::constants::BUNDLED_PRICES;
use crate::error::ChartError;
use crate::shared::Range;
use serde::{Deserialize, Serialize};

/// A single (price, timestamp) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    /// Unix timestamp in seconds.
    pub timestamp: f64,
}

impl PricePoint {
    pub fn new(price: f64, timestamp: f64) -> Self {
        Self { price, timestamp }
    }
}

/// Chronological price samples.
pub type PriceList = Vec<PricePoint>;

/// Validated series for one range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    pub range: Range,
    pub points: PriceList,
    pub percent_change: Option<f64>,
}

impl PriceSeries {
    pub fn new(range: Range, points: PriceList) -> Self {
        Self {
            range,
            points,
            percent_change: None,
        }
    }

    /// The first `n` points, or all of them when the series is shorter.
    pub fn head(&self, n: usize) -> &[PricePoint] {
        &self.points[..n.min(self.points.len())]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// All five ranges of a price document.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    series: [PriceSeries; 5],
    latest: Option<f64>,
}

impl PriceHistory {
    /// Build from per-range series. Missing ranges are left empty.
    pub fn new(series: impl IntoIterator<Item = PriceSeries>) -> Self {
        let mut slots: [PriceSeries; 5] = Range::ALL.map(|r| PriceSeries::new(r, Vec::new()));
        for s in series {
            let idx = s.range.rank() as usize;
            slots[idx] = s;
        }
        Self {
            series: slots,
            latest: None,
        }
    }

    /// Parse and validate a price document.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let doc: wire::PriceDocument = serde_json::from_str(json)?;
        Self::try_from(doc)
    }

    /// The sample dataset compiled into the crate.
    pub fn bundled() -> Result<Self, ChartError> {
        Self::from_json(BUNDLED_PRICES)
    }

    pub fn series(&self, range: Range) -> &PriceSeries {
        &self.series[range.rank() as usize]
    }

    /// Series in label order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceSeries> {
        self.series.iter()
    }

    /// Latest quoted price, when the document carries one.
    pub fn latest(&self) -> Option<f64> {
        self.latest
    }
}
