//! Domain modules organized as vertical slices.
//!
//! - `series`: Price document wire types, validation, per-range series
//! - `path`: Cubic path model over kurbo, spline builder, blending
//! - `catalog`: One precomputed graph per range
//! - `transition`: Shared cross-fade state and its controller
//! - `presentation`: Per-frame view model and SVG output

pub mod catalog;
pub mod path;
pub mod presentation;
pub mod series;
pub mod transition;
