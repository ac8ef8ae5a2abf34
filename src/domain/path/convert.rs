//! Conversions between `kurbo::BezPath` and the blendable [`Path`].
//!
//! Parsing is delegated to `BezPath::from_svg`, which resolves relative,
//! smooth and implicit commands. Lines and quadratics are then raised to
//! cubics. Only a single subpath is accepted.

use super::{line, Path};
use crate::error::PathError;
use kurbo::{BezPath, CubicBez, PathEl, QuadBez};

/// Parse SVG path data into a cubic-only [`Path`].
pub fn from_svg(d: &str) -> Result<Path, PathError> {
    if !d.trim_start().starts_with(['M', 'm']) {
        return Err(PathError::MissingMoveTo);
    }
    let bez = BezPath::from_svg(d).map_err(|e| PathError::Syntax(e.to_string()))?;
    Path::try_from(&bez)
}

impl TryFrom<&BezPath> for Path {
    type Error = PathError;

    fn try_from(bez: &BezPath) -> Result<Self, Self::Error> {
        let mut path: Option<Path> = None;
        for el in bez.elements() {
            if let PathEl::MoveTo(start) = *el {
                if path.is_some() {
                    return Err(PathError::Syntax(
                        "multiple subpaths are not supported".to_string(),
                    ));
                }
                path = Some(Path::new(start));
                continue;
            }

            let p = path.as_mut().ok_or(PathError::MissingMoveTo)?;
            if p.closed {
                return Err(PathError::Syntax("content after closepath".to_string()));
            }
            let from = p.end();
            match *el {
                PathEl::LineTo(to) => p.curves.push(line(from, to)),
                PathEl::QuadTo(q, to) => p.curves.push(QuadBez::new(from, q, to).raise()),
                PathEl::CurveTo(c1, c2, to) => p.curves.push(CubicBez::new(from, c1, c2, to)),
                PathEl::ClosePath => p.closed = true,
                PathEl::MoveTo(_) => {}
            }
        }
        path.ok_or(PathError::MissingMoveTo)
    }
}

impl From<&Path> for BezPath {
    fn from(path: &Path) -> Self {
        let mut bez = BezPath::new();
        bez.move_to(path.start);
        for c in &path.curves {
            bez.curve_to(c.p1, c.p2, c.p3);
        }
        if path.closed {
            bez.close_path();
        }
        bez
    }
}
