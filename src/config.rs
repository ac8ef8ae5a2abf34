//! Chart configuration.

use crate::constants::{HIGHLIGHT_COLOR, POINTS, SIZE, STROKE_COLOR, STROKE_WIDTH};
use crate::domain::transition::Timing;
use crate::error::ChartError;

/// Geometry, styling and animation settings for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Side of the square viewport.
    pub size: f64,
    /// Points kept from the head of each range.
    pub points_per_range: usize,
    pub stroke_width: f64,
    pub stroke: String,
    /// Background of the selected label.
    pub highlight: String,
    /// Cross-fade timing.
    pub timing: Timing,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: SIZE,
            points_per_range: POINTS,
            stroke_width: STROKE_WIDTH,
            stroke: STROKE_COLOR.to_string(),
            highlight: HIGHLIGHT_COLOR.to_string(),
            timing: Timing::default(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::Validation(format!(
                "Viewport size must be positive, got {}",
                self.size
            )));
        }
        if self.points_per_range == 0 {
            return Err(ChartError::Validation(
                "points_per_range must be at least 1".to_string(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::Validation(format!(
                "Stroke width must be non-negative, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}
