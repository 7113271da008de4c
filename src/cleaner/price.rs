//! Price string normalization
//!
//! Listing prices come as display strings such as `₹1.2 Cr`, `₹85 Lac` or a
//! bare rupee amount. They are converted to INR and then to whole lakh.

/// 1 crore in rupees
pub const CRORE: f64 = 10_000_000.0;

/// 1 lakh in rupees
pub const LAKH: f64 = 100_000.0;

/// Parses a display price into rupees
///
/// Returns `None` for an empty price and for any string whose numeric part
/// cannot be parsed (e.g. "Price on Request").
///
/// # Example
///
/// ```
/// use listing_harvest::cleaner::parse_price_inr;
///
/// assert_eq!(parse_price_inr("₹85 Lac"), Some(8_500_000.0));
/// assert_eq!(parse_price_inr("4,500,000"), Some(4_500_000.0));
/// assert_eq!(parse_price_inr(""), None);
/// ```
pub fn parse_price_inr(raw: &str) -> Option<f64> {
    let stripped = raw.replace('₹', "").replace(',', "");
    let stripped = stripped.trim();

    if stripped.is_empty() {
        return None;
    }

    let (number, multiplier) = if stripped.contains("Cr") {
        (stripped.replace("Cr", ""), CRORE)
    } else if stripped.contains("Lac") || stripped.contains("Lakh") {
        (stripped.replace("Lac", "").replace("Lakh", ""), LAKH)
    } else {
        (stripped.to_string(), 1.0)
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value * multiplier)
}

/// Converts rupees to whole lakh, truncating any fraction
pub fn price_lakh(price_inr: f64) -> i64 {
    (price_inr / LAKH).trunc() as i64
}

/// Price per square foot rounded to two decimals
///
/// Zero (or negative) area and a missing price both yield exactly 0.
pub fn price_per_sqft(price_inr: Option<f64>, carpet_area_sqft: i64) -> f64 {
    match price_inr {
        Some(price) if carpet_area_sqft > 0 => round2(price / carpet_area_sqft as f64),
        _ => 0.0,
    }
}

/// Rounds to two decimals, ties to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
