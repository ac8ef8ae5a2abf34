//! Conversions from wire types to validated series.
//!
//! Price strings that do not parse to a finite number, and non-finite
//! timestamps, are rejected here rather than left to degrade the geometry.

use super::wire::{DataPoints, PriceDocument};
use super::{PriceHistory, PricePoint, PriceSeries};
use crate::error::ChartError;
use crate::shared::Range;

impl TryFrom<PriceDocument> for PriceHistory {
    type Error = ChartError;

    fn try_from(doc: PriceDocument) -> Result<Self, Self::Error> {
        let p = doc.data.prices;
        let latest = p
            .latest
            .as_deref()
            .map(|raw| {
                parse_price(raw)
                    .ok_or_else(|| ChartError::Validation(format!("Invalid latest price: {raw:?}")))
            })
            .transpose()?;

        let mut history = PriceHistory::new([
            convert_series(Range::Hour, p.hour)?,
            convert_series(Range::Day, p.day)?,
            convert_series(Range::Month, p.month)?,
            convert_series(Range::Year, p.year)?,
            convert_series(Range::All, p.all)?,
        ]);
        history.latest = latest;
        Ok(history)
    }
}

/// Validate one range's raw pairs.
pub fn convert_series(range: Range, raw: DataPoints) -> Result<PriceSeries, ChartError> {
    let points = raw
        .prices
        .into_iter()
        .enumerate()
        .map(|(index, (price, timestamp))| {
            let value = parse_price(&price).ok_or_else(|| ChartError::InvalidPrice {
                range,
                index,
                value: price.clone(),
            })?;
            if !timestamp.is_finite() {
                return Err(ChartError::InvalidTimestamp { range, index });
            }
            Ok(PricePoint::new(value, timestamp))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PriceSeries {
        range,
        points,
        percent_change: raw.percent_change,
    })
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, f64)]) -> DataPoints {
        DataPoints {
            percent_change: Some(-1.25),
            prices: pairs.iter().map(|(p, t)| (p.to_string(), *t)).collect(),
        }
    }

    #[test]
    fn test_convert_series_parses_prices() {
        let s = convert_series(Range::Day, raw(&[("101.25", 10.0), (" 99 ", 20.0)])).unwrap();
        assert_eq!(s.range, Range::Day);
        assert_eq!(s.points, vec![PricePoint::new(101.25, 10.0), PricePoint::new(99.0, 20.0)]);
        assert_eq!(s.percent_change, Some(-1.25));
    }

    #[test]
    fn test_convert_series_rejects_malformed_price() {
        let err = convert_series(Range::Month, raw(&[("1", 1.0), ("abc", 2.0)])).unwrap_err();
        match err {
            ChartError::InvalidPrice { range, index, value } => {
                assert_eq!(range, Range::Month);
                assert_eq!(index, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_convert_series_rejects_non_finite_price() {
        assert!(convert_series(Range::Hour, raw(&[("NaN", 1.0)])).is_err());
        assert!(convert_series(Range::Hour, raw(&[("inf", 1.0)])).is_err());
    }

    #[test]
    fn test_convert_series_rejects_non_finite_timestamp() {
        let err = convert_series(Range::Year, raw(&[("1", f64::NAN)])).unwrap_err();
        assert!(matches!(err, ChartError::InvalidTimestamp { index: 0, .. }));
    }

    #[test]
    fn test_document_conversion() {
        let json = r#"{"data": {"prices": {
            "latest": "12.5",
            "hour":  {"percent_change": 0.5, "prices": [["1", 1], ["2", 2]]},
            "day":   {"prices": [["3", 3]]},
            "month": {"prices": [["4", 4]]},
            "year":  {"prices": [["5", 5]]},
            "all":   {"prices": [["6", 6]], "extra": true}
        }}}"#;
        let history = PriceHistory::from_json(json).unwrap();
        assert_eq!(history.latest(), Some(12.5));
        assert_eq!(history.series(Range::Hour).len(), 2);
        assert_eq!(history.series(Range::Hour).percent_change, Some(0.5));
        assert_eq!(history.series(Range::All).points[0].price, 6.0);
    }

    #[test]
    fn test_document_missing_range_is_serde_error() {
        let json = r#"{"data": {"prices": {"hour": {"prices": []}}}}"#;
        assert!(matches!(PriceHistory::from_json(json), Err(ChartError::Serde(_))));
    }
}
