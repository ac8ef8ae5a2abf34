//! High-level chart: `PriceGraph` wires the catalog, transition
//! controller and presenter together.
//!
//! Lifecycle: build once (parsing the document and precomputing every
//! range's path), then share clones between the interaction side and the
//! render loop. Clones share transition state and the catalog.

use crate::config::ChartConfig;
use crate::constants::BUNDLED_PRICES;
use crate::domain::catalog::Catalog;
use crate::domain::presentation::{render_svg, Frame, Presenter};
use crate::domain::series::PriceHistory;
use crate::domain::transition::{Timing, TransitionController};
use crate::error::ChartError;
use std::sync::Arc;
use std::time::Instant;

/// The primary entry point: an animated price-history chart.
#[derive(Debug, Clone)]
pub struct PriceGraph {
    presenter: Presenter,
}

impl PriceGraph {
    pub fn builder() -> PriceGraphBuilder {
        PriceGraphBuilder::default()
    }

    /// Chart over the sample dataset with default settings.
    pub fn bundled() -> Result<Self, ChartError> {
        Self::builder().build()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.presenter.controller().catalog()
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn controller(&self) -> &TransitionController {
        self.presenter.controller()
    }

    pub fn config(&self) -> &ChartConfig {
        self.presenter.config()
    }

    /// Label tap.
    pub fn press(&self, label: &str) -> Result<(), ChartError> {
        self.presenter.press(label, Instant::now())
    }

    pub fn frame(&self) -> Frame {
        self.presenter.frame(Instant::now())
    }

    /// Current frame as an SVG document.
    pub fn render_svg(&self) -> String {
        render_svg(&self.frame(), self.config())
    }

    /// Frames until the running transition settles.
    #[cfg(feature = "driver")]
    pub fn frames(
        &self,
        interval: std::time::Duration,
    ) -> impl futures_util::Stream<Item = Frame> {
        crate::driver::frames(self.presenter.clone(), interval)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

enum Source {
    Json(String),
    History(PriceHistory),
}

pub struct PriceGraphBuilder {
    config: ChartConfig,
    source: Source,
}

impl Default for PriceGraphBuilder {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            source: Source::Json(BUNDLED_PRICES.to_string()),
        }
    }
}

impl PriceGraphBuilder {
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.config.size = size;
        self
    }

    pub fn points_per_range(mut self, points: usize) -> Self {
        self.config.points_per_range = points;
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.config.timing = timing;
        self
    }

    /// Use an already parsed history.
    pub fn history(mut self, history: PriceHistory) -> Self {
        self.source = Source::History(history);
        self
    }

    /// Use a price document in JSON form.
    pub fn json(mut self, json: impl Into<String>) -> Self {
        self.source = Source::Json(json.into());
        self
    }

    pub fn build(self) -> Result<PriceGraph, ChartError> {
        self.config.validate()?;
        let history = match self.source {
            Source::Json(json) => PriceHistory::from_json(&json)?,
            Source::History(history) => history,
        };
        let catalog = Arc::new(Catalog::build(&history, &self.config)?);
        let controller = TransitionController::new(catalog, self.config.timing);
        Ok(PriceGraph {
            presenter: Presenter::new(controller, self.config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::{PricePoint, PriceSeries};
    use crate::shared::Range;

    #[test]
    fn test_bundled_graph() {
        let graph = PriceGraph::bundled().unwrap();
        assert_eq!(graph.catalog().len(), 5);
        assert_eq!(graph.frame().selected, 0);
        assert!(graph.render_svg().contains("stroke-width=\"3\""));
    }

    #[test]
    fn test_builder_overrides() {
        let graph = PriceGraph::builder()
            .size(200.0)
            .points_per_range(10)
            .timing(Timing::immediate())
            .build()
            .unwrap();
        assert_eq!(graph.config().size, 200.0);
        assert_eq!(graph.catalog().first().path.len(), 11);
        let (_, hi) = graph.catalog().first().path.bounds();
        assert!(hi.x <= 200.0 && hi.y <= 200.0);

        graph.press("all").unwrap();
        assert!(graph.frame().settled);
    }

    #[test]
    fn test_builder_from_history() {
        let history = PriceHistory::new(Range::ALL.map(|r| {
            PriceSeries::new(r, vec![PricePoint::new(1.0, 0.0), PricePoint::new(2.0, 1.0)])
        }));
        let graph = PriceGraph::builder().history(history).build().unwrap();
        assert_eq!(graph.catalog().by_range(Range::Year).path.len(), 1);
    }

    #[test]
    fn test_builder_rejects_bad_input() {
        assert!(matches!(
            PriceGraph::builder().json("{").build(),
            Err(ChartError::Serde(_))
        ));
        assert!(matches!(
            PriceGraph::builder().size(-1.0).build(),
            Err(ChartError::Validation(_))
        ));
    }

    #[test]
    fn test_clones_share_transition() {
        let ui = PriceGraph::bundled().unwrap();
        let render = ui.clone();
        ui.press("1M").unwrap();
        assert_eq!(render.frame().selected, 2);
        assert!(Arc::ptr_eq(ui.catalog(), render.catalog()));
    }

    #[test]
    fn test_catalog_is_the_controllers() {
        let graph = PriceGraph::bundled().unwrap();
        assert!(Arc::ptr_eq(graph.catalog(), graph.controller().catalog()));
        assert!(Arc::ptr_eq(
            graph.catalog(),
            graph.presenter().controller().catalog()
        ));
    }
}
