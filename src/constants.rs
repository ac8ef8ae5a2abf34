//! Chart defaults shared by the builder, presenter and renderer.

use std::time::Duration;

/// Side of the square viewport the paths are scaled into.
pub const SIZE: f64 = 400.0;

/// Points kept from the head of each range's series.
pub const POINTS: usize = 60;

/// Path stroke width.
pub const STROKE_WIDTH: f64 = 3.0;

/// Path stroke color.
pub const STROKE_COLOR: &str = "black";

/// Background of the selected range label.
pub const HIGHLIGHT_COLOR: &str = "#f3f3f3";

/// Background of every other range label.
pub const TRANSPARENT: &str = "transparent";

/// Length of a range cross-fade.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Radius of the cursor dot.
pub const CURSOR_RADIUS: f64 = 6.0;

/// Sample dataset compiled into the crate.
pub const BUNDLED_PRICES: &str = include_str!("../data/prices.json");
