//! Path blending.

use super::Path;
use kurbo::CubicBez;

/// Blend `from` toward `to` by `t`.
///
/// `t` is clamped to `[0, 1]`; the endpoints return exact copies of the
/// inputs. When the curve counts differ, the shorter path is padded with
/// zero-length curves at its end point so every curve has a partner.
///
/// Runs once per animation frame and does not log.
pub fn mix(t: f64, from: &Path, to: &Path) -> Path {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t == 0.0 {
        return from.clone();
    }
    if t == 1.0 {
        return to.clone();
    }

    let n = from.len().max(to.len());
    let a = padded(from, n);
    let b = padded(to, n);

    Path {
        start: from.start.lerp(to.start, t),
        curves: a
            .iter()
            .zip(b.iter())
            .map(|(ca, cb)| CubicBez {
                p0: ca.p0.lerp(cb.p0, t),
                p1: ca.p1.lerp(cb.p1, t),
                p2: ca.p2.lerp(cb.p2, t),
                p3: ca.p3.lerp(cb.p3, t),
            })
            .collect(),
        closed: if t < 0.5 { from.closed } else { to.closed },
    }
}

/// `path`'s curves extended to `n` with zero-length curves at its end.
fn padded(path: &Path, n: usize) -> Vec<CubicBez> {
    let mut curves = path.curves.clone();
    let end = path.end();
    curves.resize(n.max(curves.len()), CubicBez::new(end, end, end, end));
    curves
}
