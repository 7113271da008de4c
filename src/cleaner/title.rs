//! Fields pattern-matched out of the listing title

use crate::cleaner::text::title_case;
use regex::Regex;
use std::sync::LazyLock;

static BHK_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*BHK").unwrap());

static PROPERTY_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BHK\s+(\w+)").unwrap());

static LISTING_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"for Sale|for Rent").unwrap());

/// Bedroom count written as `<n> BHK`; 0 when absent
pub fn extract_bhk(title: &str) -> u32 {
    BHK_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Word right after `BHK`, title-cased; empty when absent
pub fn extract_property_type(title: &str) -> String {
    PROPERTY_TYPE_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| title_case(m.as_str()))
        .unwrap_or_default()
}

/// `for Sale` or `for Rent` exactly as written; empty when absent
pub fn extract_listing_type(title: &str) -> String {
    LISTING_TYPE_PATTERN
        .find(title)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
