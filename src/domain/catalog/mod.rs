//! Graph catalog: one precomputed path per selectable range.
//!
//! A catalog is built once, before the first frame, and is never mutated
//! afterward. Share it through an `Arc`; rebuilding means constructing a
//! new catalog from a fresh `PriceHistory`.

use crate::config::ChartConfig;
use crate::domain::path::{build_graph, Domain, Path};
use crate::domain::series::PriceHistory;
use crate::error::ChartError;
use crate::shared::{Range, Rank};
use std::sync::Arc;

/// A selectable range with its precomputed path.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEntry {
    pub label: &'static str,
    pub value: Rank,
    pub range: Range,
    pub path: Arc<Path>,
    /// Scales used to build `path`, kept for cursor readouts.
    pub domain: Domain,
    pub percent_change: Option<f64>,
}

/// The five graph entries in label order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<GraphEntry>,
}

impl Catalog {
    /// Eagerly build every range's path.
    ///
    /// Each series is capped to `config.points_per_range`; shorter series
    /// use all of their points.
    pub fn build(history: &PriceHistory, config: &ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;

        let entries = Range::ALL
            .into_iter()
            .map(|range| {
                let series = history.series(range);
                if series.is_empty() {
                    return Err(ChartError::EmptySeries(range));
                }
                let points = series.head(config.points_per_range);
                let built = build_graph(points, config.size)?;
                tracing::debug!(
                    "Built {} graph: {} point(s), {} curve(s)",
                    range,
                    points.len(),
                    built.path.len()
                );
                Ok(GraphEntry {
                    label: range.label(),
                    value: range.rank(),
                    range,
                    path: Arc::new(built.path),
                    domain: built.domain,
                    percent_change: series.percent_change,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Catalog of the sample dataset compiled into the crate.
    pub fn bundled(config: &ChartConfig) -> Result<Self, ChartError> {
        Self::build(&PriceHistory::bundled()?, config)
    }

    pub fn get(&self, rank: Rank) -> Option<&GraphEntry> {
        self.entries.get(rank as usize)
    }

    pub fn by_range(&self, range: Range) -> &GraphEntry {
        &self.entries[range.rank() as usize]
    }

    pub fn by_label(&self, label: &str) -> Option<&GraphEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// The entry selected before any interaction.
    pub fn first(&self) -> &GraphEntry {
        self.by_range(Range::Hour)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GraphEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{POINTS, SIZE};
    use crate::domain::series::{PricePoint, PriceSeries};

    fn history(lengths: [usize; 5]) -> PriceHistory {
        PriceHistory::new(Range::ALL.into_iter().zip(lengths).map(|(range, n)| {
            PriceSeries::new(
                range,
                (0..n)
                    .map(|i| PricePoint::new(100.0 + (i % 7) as f64, i as f64))
                    .collect(),
            )
        }))
    }

    #[test]
    fn test_build_orders_entries_by_rank() {
        let catalog = Catalog::build(&history([80, 80, 80, 80, 80]), &ChartConfig::default()).unwrap();
        assert_eq!(catalog.len(), 5);
        for (i, entry) in catalog.iter().enumerate() {
            assert_eq!(entry.value as usize, i);
            assert_eq!(entry.label, entry.range.label());
        }
        assert_eq!(catalog.by_label("1M").unwrap().range, Range::Month);
        assert!(catalog.by_label("5Y").is_none());
        assert!(catalog.get(5).is_none());
        assert_eq!(catalog.first().range, Range::Hour);
    }

    #[test]
    fn test_build_caps_points() {
        let catalog = Catalog::build(&history([80, 60, 30, 3, 2]), &ChartConfig::default()).unwrap();
        assert_eq!(catalog.by_range(Range::Hour).path.len(), POINTS + 1);
        assert_eq!(catalog.by_range(Range::Day).path.len(), POINTS + 1);
        assert_eq!(catalog.by_range(Range::Month).path.len(), 31);
        assert_eq!(catalog.by_range(Range::Year).path.len(), 4);
        assert_eq!(catalog.by_range(Range::All).path.len(), 1);
    }

    #[test]
    fn test_empty_range_is_an_error() {
        let err = Catalog::build(&history([5, 5, 0, 5, 5]), &ChartConfig::default()).unwrap_err();
        assert!(matches!(err, ChartError::EmptySeries(Range::Month)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ChartConfig {
            points_per_range: 0,
            ..ChartConfig::default()
        };
        assert!(matches!(
            Catalog::build(&history([5; 5]), &config),
            Err(ChartError::Validation(_))
        ));
    }

    #[test]
    fn test_bundled_paths_stay_in_viewport() {
        let catalog = Catalog::bundled(&ChartConfig::default()).unwrap();
        for entry in catalog.iter() {
            let (lo, hi) = entry.path.bounds();
            assert!(lo.x >= 0.0 && lo.y >= 0.0, "{} below viewport", entry.label);
            assert!(hi.x <= SIZE && hi.y <= SIZE, "{} above viewport", entry.label);
        }
    }
}
