//! Transition state: the values shared between interaction and frame
//! evaluation.

use super::Timing;
use crate::domain::path::{mix, Path};
use crate::shared::Rank;
use std::sync::Arc;
use std::time::Instant;

/// Whether a cross-fade is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Progress, both ends of the blend, and the highlighted rank.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    pub previous: Arc<Path>,
    pub current: Arc<Path>,
    pub selected: Rank,
    /// Start of the running animation; `None` when idle.
    pub started_at: Option<Instant>,
}

impl TransitionState {
    /// Settled state showing `path`.
    pub fn idle(path: Arc<Path>, selected: Rank) -> Self {
        Self {
            progress: 1.0,
            previous: path.clone(),
            current: path,
            selected,
            started_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.started_at.is_some() {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase() == Phase::Transitioning
    }

    /// The path on screen: `previous` blended toward `current` by progress.
    pub fn displayed(&self) -> Arc<Path> {
        if self.progress >= 1.0 {
            self.current.clone()
        } else if self.progress <= 0.0 {
            self.previous.clone()
        } else {
            Arc::new(mix(self.progress, &self.previous, &self.current))
        }
    }

    /// Restart the blend toward `target`, starting from whatever is on
    /// screen right now.
    pub fn retarget(&mut self, target: Arc<Path>, selected: Rank, now: Instant) {
        self.previous = self.displayed();
        self.current = target;
        self.progress = 0.0;
        self.started_at = Some(now);
        self.selected = selected;
    }

    /// Bring progress up to `now`. Returns `true` when this call settled
    /// the transition.
    pub fn advance(&mut self, now: Instant, timing: &Timing) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);
        if timing.fraction(elapsed) >= 1.0 {
            self.progress = 1.0;
            self.started_at = None;
            return true;
        }
        self.progress = timing.progress(elapsed);
        false
    }
}
