//! Time-series → path construction.
//!
//! Points are scaled into a `size × size` viewport (time on x, price on y
//! with higher prices nearer the top) and smoothed with a uniform cubic
//! B-spline. The spline passes through the first and last points and is
//! pulled toward, but not through, the interior ones.
//!
//! Output shape by input length:
//!
//! | points | path data       |
//! |--------|-----------------|
//! | 1      | `M Z`           |
//! | 2      | `M L`           |
//! | n ≥ 3  | `M L C×(n-1) L` |

use super::Path;
use crate::domain::series::PricePoint;
use crate::error::ChartError;
use crate::shared::fmt::num::coord;
use crate::shared::LinearScale;

/// Scales used to place a series in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Timestamp → x.
    pub x: LinearScale,
    /// Price → y.
    pub y: LinearScale,
}

impl Domain {
    /// Fit both scales to the extent of `points`.
    pub fn fit(points: &[PricePoint], size: f64) -> Option<Self> {
        Some(Self {
            x: LinearScale::from_extent(points.iter().map(|p| p.timestamp), (0.0, size))?,
            y: LinearScale::from_extent(points.iter().map(|p| p.price), (size, 0.0))?,
        })
    }

    /// Timestamp and price under a viewport position.
    pub fn invert(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.invert(x), self.y.invert(y))
    }
}

/// Path data text, its parsed form, and the scales behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPath {
    pub data: String,
    pub path: Path,
    pub domain: Domain,
}

/// Build the smoothed path for a price list.
pub fn build_graph(points: &[PricePoint], size: f64) -> Result<BuiltPath, ChartError> {
    if let Some(index) = points
        .iter()
        .position(|p| !p.price.is_finite() || !p.timestamp.is_finite())
    {
        return Err(ChartError::Validation(format!(
            "Non-finite price point at index {}",
            index
        )));
    }
    let domain = Domain::fit(points, size)
        .ok_or_else(|| ChartError::Validation("Empty price list".to_string()))?;

    let mut curve = BasisCurve::default();
    for p in points {
        curve.point(domain.x.apply(p.timestamp), domain.y.apply(p.price));
    }
    let data = curve.finish();
    let path = Path::from_svg(&data)?;

    Ok(BuiltPath { data, path, domain })
}

/// Uniform B-spline emitter producing SVG path data.
#[derive(Debug, Default)]
struct BasisCurve {
    out: String,
    state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl BasisCurve {
    fn point(&mut self, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                self.move_to(x, y);
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                self.line_to(
                    (5.0 * self.x0 + self.x1) / 6.0,
                    (5.0 * self.y0 + self.y1) / 6.0,
                );
                self.bezier(x, y);
            }
            _ => self.bezier(x, y),
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }

    fn finish(mut self) -> String {
        match self.state {
            3 => {
                self.bezier(self.x1, self.y1);
                self.line_to(self.x1, self.y1);
            }
            2 => self.line_to(self.x1, self.y1),
            1 => self.out.push('Z'),
            _ => {}
        }
        self.out
    }

    fn bezier(&mut self, x: f64, y: f64) {
        let (x0, y0, x1, y1) = (self.x0, self.y0, self.x1, self.y1);
        self.out.push_str(&format!(
            "C{},{},{},{},{},{}",
            coord((2.0 * x0 + x1) / 3.0),
            coord((2.0 * y0 + y1) / 3.0),
            coord((x0 + 2.0 * x1) / 3.0),
            coord((y0 + 2.0 * y1) / 3.0),
            coord((x0 + 4.0 * x1 + x) / 6.0),
            coord((y0 + 4.0 * y1 + y) / 6.0)
        ));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.out.push_str(&format!("M{},{}", coord(x), coord(y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.out.push_str(&format!("L{},{}", coord(x), coord(y)));
    }
}
