//! Pure linear scales mapping data values into viewport coordinates.
//!
//! No async, no allocation.
//!
//! A scale maps a continuous `domain` onto a continuous `range`:
//!
//! ```text
//! t     = (value - domain.0) / (domain.1 - domain.0)
//! mapped = range.0 + t * (range.1 - range.0)
//! ```
//!
//! A degenerate domain (`domain.0 == domain.1`) maps every input to the
//! midpoint of the range instead of dividing by zero.

/// Linear scale from a data domain onto an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Build a scale whose domain spans the extent of `values`.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_extent<I>(values: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = extent(values)?;
        Some(Self::new((min, max), range))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Map a domain value into the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Map a range value back into the domain.
    pub fn invert(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (value - r0) / span };
        d0 + t * (d1 - d0)
    }
}

/// Minimum and maximum of `values`, or `None` when empty.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
