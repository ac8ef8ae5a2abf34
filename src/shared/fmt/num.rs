//! Number formatting for path data and cursor readouts.
//!
//! Path coordinates use the shortest round-trip representation so the same
//! geometry always serializes to the same bytes. Readout values get
//! magnitude-based decimal places, trimmed zeros and comma separators.

/// Format a path coordinate.
///
/// Uses the shortest representation that parses back to the same `f64`,
/// and normalizes `-0` to `0`.
pub fn coord(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Format a price for a cursor readout, e.g. `$11,342.17`.
pub fn display_price(price: f64) -> String {
    let body = display_with_decimals(price.abs(), price_decimals(price));
    if price < 0.0 && body != "0" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Format with `decimals` places, trailing zeros trimmed, thousands grouped.
pub fn display_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", value, decimals);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(trimmed.len() + integer.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(integer));
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Two places for ordinary prices, more for sub-unit ones (capped at 8).
fn price_decimals(value: f64) -> usize {
    let abs = value.abs();
    if abs >= 1.0 || abs == 0.0 || !abs.is_finite() {
        return 2;
    }
    let exponent = abs.log10().floor().abs() as usize;
    (exponent + 2).min(8)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
