//! # Rainbow Chart
//!
//! Headless core of an animated price-history chart with selectable time
//! ranges.
//!
//! ## Architecture
//!
//! 1. **Series**: Parse the static price document into five validated ranges
//! 2. **Path**: Scale each range into a square viewport and smooth it with a B-spline
//! 3. **Catalog**: Precompute one path per range, once, before the first frame
//! 4. **Transition**: Cross-fade between paths on selection, state held in a shared cell
//! 5. **Presentation**: Per-frame blended path, cursor, label highlight and SVG output
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rainbow_chart::prelude::*;
//!
//! let graph = PriceGraph::builder().build()?;
//!
//! graph.press("1Y")?;
//! let frame = graph.frame();
//! let svg = graph.render_svg();
//! ```

/// Shared newtypes, scales, formatting and the shared cell.
pub mod shared;

/// Domain modules (vertical slices).
pub mod domain;

/// Unified error types.
pub mod error;

/// Chart defaults and the bundled dataset.
pub mod constants;

/// Geometry, styling and timing settings.
pub mod config;

/// `PriceGraph`: the primary entry point.
pub mod graph;

/// Async frame stream.
#[cfg(feature = "driver")]
pub mod driver;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{LinearScale, Point, Range, Rank, SharedValue};

    // Domain types: series
    pub use crate::domain::series::{PriceHistory, PriceList, PricePoint, PriceSeries};

    // Domain types: path
    pub use crate::domain::path::{build_graph, mix, BuiltPath, CubicBez, Domain, Path};

    // Domain types: catalog
    pub use crate::domain::catalog::{Catalog, GraphEntry};

    // Domain types: transition
    pub use crate::domain::transition::{
        Easing, Phase, Timing, TransitionController, TransitionState,
    };

    // Domain types: presentation
    pub use crate::domain::presentation::{
        render_document, render_svg, Cursor, Frame, LabelView, Presenter, Readout,
    };

    // Errors
    pub use crate::error::{ChartError, PathError};

    // Configuration
    pub use crate::config::ChartConfig;
    pub use crate::constants::{POINTS, SIZE};

    // Entry point
    pub use crate::graph::{PriceGraph, PriceGraphBuilder};

    #[cfg(feature = "driver")]
    pub use crate::driver::{frames, FRAME_INTERVAL};
}
