//! Presentation layer: per-frame view model for the chart and label row.
//!
//! Pull model: the host calls [`Presenter::frame`] once per rendered frame
//! and every derived value (blended path, cursor, highlight) is recomputed
//! from the shared transition state at that moment.

pub mod svg;

pub use svg::{render_document, render_svg};

use crate::config::ChartConfig;
use crate::constants::TRANSPARENT;
use crate::domain::catalog::GraphEntry;
use crate::domain::path::Path;
use crate::domain::transition::{TransitionController, TransitionState};
use crate::error::ChartError;
use crate::shared::fmt::num::display_price;
use crate::shared::{Range, Rank, SharedValue};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

/// One range label in the selection row.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub label: &'static str,
    pub rank: Rank,
    pub highlighted: bool,
    pub background: String,
}

/// Cursor dot position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

/// Price and time under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub price: f64,
    /// Unix seconds.
    pub timestamp: f64,
    pub price_label: String,
    pub time_label: String,
    pub percent_change: Option<f64>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub progress: f64,
    pub settled: bool,
    pub selected: Rank,
    /// Blended path.
    pub path: Arc<Path>,
    /// `path` as SVG path data.
    pub d: String,
    pub cursor: Option<Cursor>,
    pub readout: Option<Readout>,
    pub labels: Vec<LabelView>,
}

impl Frame {
    pub fn highlighted(&self) -> impl Iterator<Item = &LabelView> {
        self.labels.iter().filter(|l| l.highlighted)
    }
}

/// Builds frames and routes label presses to the transition controller.
#[derive(Debug, Clone)]
pub struct Presenter {
    controller: TransitionController,
    config: ChartConfig,
    /// Horizontal cursor position; `None` pins it to the latest point.
    cursor_x: SharedValue<Option<f64>>,
}

impl Presenter {
    pub fn new(controller: TransitionController, config: ChartConfig) -> Self {
        Self {
            controller,
            config,
            cursor_x: SharedValue::new(None),
        }
    }

    /// Label tap.
    pub fn press(&self, label: &str, now: Instant) -> Result<(), ChartError> {
        self.controller.select_label(label, now)
    }

    pub fn press_rank(&self, rank: Rank, now: Instant) -> Result<(), ChartError> {
        self.controller.select(rank, now)
    }

    /// Move the cursor; `None` returns it to the right edge.
    pub fn set_cursor_x(&self, x: Option<f64>) {
        let size = self.config.size;
        self.cursor_x
            .set(x.filter(|v| v.is_finite()).map(|v| v.clamp(0.0, size)));
    }

    /// Advance the transition to `now` and describe the frame.
    pub fn frame(&self, now: Instant) -> Frame {
        let state = self.controller.tick_snapshot(now);
        self.compose(&state, self.cursor_x.get())
    }

    pub async fn frame_async(&self, now: Instant) -> Frame {
        let state = self.controller.tick_snapshot_async(now).await;
        let cursor_x = self.cursor_x.get_async().await;
        self.compose(&state, cursor_x)
    }

    /// Label row for `selected`.
    pub fn labels(&self, selected: Rank) -> Vec<LabelView> {
        self.controller
            .catalog()
            .iter()
            .map(|entry| {
                let highlighted = entry.value == selected;
                LabelView {
                    label: entry.label,
                    rank: entry.value,
                    highlighted,
                    background: if highlighted {
                        self.config.highlight.clone()
                    } else {
                        TRANSPARENT.to_string()
                    },
                }
            })
            .collect()
    }

    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn compose(&self, state: &TransitionState, cursor_x: Option<f64>) -> Frame {
        let path = state.displayed();
        let entry = self
            .controller
            .catalog()
            .get(state.selected)
            .unwrap_or_else(|| self.controller.catalog().first());

        let x = cursor_x.unwrap_or_else(|| state.current.end().x);
        let cursor = state.current.y_for_x(x).map(|y| Cursor { x, y });
        let readout = cursor.map(|c| readout(entry, c));

        Frame {
            progress: state.progress,
            settled: !state.is_transitioning(),
            selected: state.selected,
            d: path.to_svg(),
            path,
            cursor,
            readout,
            labels: self.labels(state.selected),
        }
    }
}

fn readout(entry: &GraphEntry, cursor: Cursor) -> Readout {
    let (timestamp, price) = entry.domain.invert(cursor.x, cursor.y);
    Readout {
        price,
        timestamp,
        price_label: display_price(price),
        time_label: time_label(entry.range, timestamp),
        percent_change: entry.percent_change,
    }
}

fn time_label(range: Range, timestamp: f64) -> String {
    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9) as u32;
    let Some(at) = DateTime::<Utc>::from_timestamp(secs as i64, nanos) else {
        return String::new();
    };
    match range {
        Range::Hour | Range::Day => at.format("%Y-%m-%d %H:%M").to_string(),
        Range::Month | Range::Year | Range::All => at.format("%Y-%m-%d").to_string(),
    }
}
