//! Path domain: cubic-only vector paths, their SVG text form, blending
//! and sampling.
//!
//! SVG path data is read and written through `kurbo::BezPath`. A [`Path`]
//! is the blendable form of one subpath: every segment is a
//! [`CubicBez`], so two paths with the same segment count can be mixed
//! point by point.

pub mod builder;
pub mod convert;
pub mod mix;

use crate::error::PathError;
use crate::shared::Point;
use kurbo::common::solve_cubic;
use kurbo::{BezPath, ParamCurve};
use serde::{Deserialize, Serialize};

pub use builder::{build_graph, BuiltPath, Domain};
pub use kurbo::CubicBez;
pub use mix::mix;

/// Slack allowed when matching cubic roots to the `[0, 1]` parameter range.
const ROOT_EPSILON: f64 = 1e-9;

/// A straight segment as a cubic: `C from,to,to`.
pub fn line(from: Point, to: Point) -> CubicBez {
    CubicBez::new(from, from, to, to)
}

/// A single open or closed subpath. Each curve starts where the previous
/// one ends; the first starts at `start`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub start: Point,
    pub curves: Vec<CubicBez>,
    pub closed: bool,
}

impl Path {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            curves: Vec::new(),
            closed: false,
        }
    }

    /// Parse SVG path data.
    pub fn from_svg(d: &str) -> Result<Self, PathError> {
        convert::from_svg(d)
    }

    pub fn to_bez_path(&self) -> BezPath {
        BezPath::from(self)
    }

    /// Serialize as SVG path data.
    pub fn to_svg(&self) -> String {
        self.to_bez_path().to_svg()
    }

    /// Append a segment starting at the current end point.
    pub fn line_to(&mut self, to: Point) {
        let from = self.end();
        self.curves.push(line(from, to));
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Last on-curve point.
    pub fn end(&self) -> Point {
        self.curves.last().map(|c| c.p3).unwrap_or(self.start)
    }

    /// Start point plus every control and end point.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.curves.iter().flat_map(|c| [c.p1, c.p2, c.p3]))
    }

    pub fn point_count(&self) -> usize {
        1 + self.curves.len() * 3
    }

    /// `(min, max)` corners over all points, control points included.
    pub fn bounds(&self) -> (Point, Point) {
        self.points().fold((self.start, self.start), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        })
    }

    /// y of the curve at horizontal position `x`.
    ///
    /// Assumes x is monotonic within each segment, which holds for paths
    /// built from chronological series. Returns `None` when `x` lies
    /// outside the path's horizontal extent.
    pub fn y_for_x(&self, x: f64) -> Option<f64> {
        if !x.is_finite() {
            return None;
        }
        if self.curves.is_empty() {
            return (x == self.start.x).then_some(self.start.y);
        }
        self.curves.iter().find_map(|seg| y_on_segment(seg, x))
    }
}

/// y where `seg` crosses the vertical line at `x`, if it does.
fn y_on_segment(seg: &CubicBez, x: f64) -> Option<f64> {
    let (lo, hi) = if seg.p0.x <= seg.p3.x {
        (seg.p0.x, seg.p3.x)
    } else {
        (seg.p3.x, seg.p0.x)
    };
    if x < lo || x > hi {
        return None;
    }
    if hi == lo {
        return Some(seg.p3.y);
    }
    if x == seg.p0.x {
        return Some(seg.p0.y);
    }
    if x == seg.p3.x {
        return Some(seg.p3.y);
    }

    // x(t) in power basis.
    let (x0, x1, x2, x3) = (seg.p0.x, seg.p1.x, seg.p2.x, seg.p3.x);
    let c0 = x0 - x;
    let c1 = 3.0 * (x1 - x0);
    let c2 = 3.0 * (x2 - 2.0 * x1 + x0);
    let c3 = x3 - 3.0 * x2 + 3.0 * x1 - x0;

    let t = solve_cubic(c0, c1, c2, c3)
        .into_iter()
        .find(|t| (-ROOT_EPSILON..=1.0 + ROOT_EPSILON).contains(t))?
        .clamp(0.0, 1.0);
    Some(seg.eval(t).y)
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_svg())
    }
}

impl std::str::FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        convert::from_svg(s)
    }
}
