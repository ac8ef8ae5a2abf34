//! Transition controller: cross-fades between catalog paths on selection.
//!
//! Two phases: **Idle** (progress == 1) and **Transitioning** (progress
//! animating 0 → 1). Every selection restarts the blend from 0, from the
//! path currently on screen, even when the same range is chosen again.
//! There is no queueing: a new selection preempts a running one.
//!
//! The controller is `Clone`; clones share one [`SharedValue`] so an
//! interaction context can call [`select`](TransitionController::select)
//! while an animation context calls [`tick`](TransitionController::tick).

pub mod state;
pub mod timing;

pub use state::{Phase, TransitionState};
pub use timing::{Easing, Timing};

use crate::domain::catalog::{Catalog, GraphEntry};
use crate::domain::path::Path;
use crate::error::ChartError;
use crate::shared::{Rank, SharedValue};
use std::sync::Arc;
use std::time::Instant;

/// Drives the cross-fade between precomputed graph paths.
#[derive(Debug, Clone)]
pub struct TransitionController {
    catalog: Arc<Catalog>,
    timing: Timing,
    state: SharedValue<TransitionState>,
}

impl TransitionController {
    /// Start idle on the catalog's first entry.
    pub fn new(catalog: Arc<Catalog>, timing: Timing) -> Self {
        let first = catalog.first();
        let state = TransitionState::idle(first.path.clone(), first.value);
        Self {
            catalog,
            timing,
            state: SharedValue::new(state),
        }
    }

    /// Select the entry with `rank`, restarting the blend at `now`.
    pub fn select(&self, rank: Rank, now: Instant) -> Result<(), ChartError> {
        let entry = self.catalog.get(rank).ok_or(ChartError::UnknownRank(rank))?;
        let timing = self.timing;
        self.state.update(|s| {
            s.advance(now, &timing);
            let preempted = s.is_transitioning();
            let from = s.selected;
            s.retarget(entry.path.clone(), entry.value, now);
            tracing::debug!(
                "Selected {} (rank {} -> {}, preempted: {})",
                entry.label,
                from,
                entry.value,
                preempted
            );
        });
        Ok(())
    }

    /// Select by label text, e.g. `"1Y"`.
    pub fn select_label(&self, label: &str, now: Instant) -> Result<(), ChartError> {
        let rank = self
            .catalog
            .by_label(label)
            .map(|e| e.value)
            .ok_or_else(|| ChartError::UnknownLabel(label.to_string()))?;
        self.select(rank, now)
    }

    /// Advance progress to `now` and return it.
    pub fn tick(&self, now: Instant) -> f64 {
        self.tick_snapshot(now).progress
    }

    /// Async variant of [`tick`](Self::tick) for executors that must not block.
    pub async fn tick_async(&self, now: Instant) -> f64 {
        self.tick_snapshot_async(now).await.progress
    }

    /// Advance to `now` and copy the resulting state under one write lock.
    pub fn tick_snapshot(&self, now: Instant) -> TransitionState {
        let timing = self.timing;
        self.state.update(|s| {
            if s.advance(now, &timing) {
                tracing::debug!("Transition to rank {} settled", s.selected);
            }
            s.clone()
        })
    }

    pub async fn tick_snapshot_async(&self, now: Instant) -> TransitionState {
        let timing = self.timing;
        self.state
            .update_async(|s| {
                if s.advance(now, &timing) {
                    tracing::debug!("Transition to rank {} settled", s.selected);
                }
                s.clone()
            })
            .await
    }

    pub fn progress(&self) -> f64 {
        self.state.with(|s| s.progress)
    }

    pub fn phase(&self) -> Phase {
        self.state.with(|s| s.phase())
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.with(|s| s.is_transitioning())
    }

    pub fn selected(&self) -> Rank {
        self.state.with(|s| s.selected)
    }

    pub fn selected_entry(&self) -> &GraphEntry {
        let rank = self.selected();
        self.catalog.get(rank).unwrap_or_else(|| self.catalog.first())
    }

    /// Blend of previous and current at the last ticked progress.
    pub fn displayed_path(&self) -> Arc<Path> {
        self.state.with(|s| s.displayed())
    }

    pub fn current_path(&self) -> Arc<Path> {
        self.state.with(|s| s.current.clone())
    }

    pub fn previous_path(&self) -> Arc<Path> {
        self.state.with(|s| s.previous.clone())
    }

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> TransitionState {
        self.state.get()
    }

    pub async fn snapshot_async(&self) -> TransitionState {
        self.state.get_async().await
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }
}
