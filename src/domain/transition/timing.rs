//! Transition timing curves.

use crate::constants::DEFAULT_DURATION;
use std::time::Duration;

/// Easing curve applied to linear time progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out.
    #[default]
    InOutQuad,
    /// Cubic ease-in-out.
    InOutCubic,
}

impl Easing {
    /// Map linear progress `t ∈ [0, 1]` onto the curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(2) / 2.0
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
                }
            }
        }
    }
}

/// Duration and easing of a cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::InOutQuad,
        }
    }
}

impl Timing {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Completes on the first tick.
    pub fn immediate() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Linear fraction of the duration elapsed, capped at 1.
    pub fn fraction(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased progress after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        self.easing.apply(self.fraction(elapsed))
    }
}
