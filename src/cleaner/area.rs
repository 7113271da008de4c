//! Carpet area normalization and batch-wide median imputation

/// Parses an area string such as `850 sqft` into square feet
///
/// Anything that does not coerce to a finite, non-negative number is treated
/// as missing.
pub fn parse_area_sqft(raw: &str) -> Option<f64> {
    raw.replace("sqft", "")
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Median of the given values; the mean of the two middle values for an even count
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Carpet areas of a whole batch after imputation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImputedAreas {
    /// One value per input row, in input order
    pub values: Vec<i64>,

    /// Truncated median used as the fill value
    pub median: i64,

    /// Number of rows that received the median
    pub imputed: usize,
}

/// Fills every missing area with the truncated median of the parsed ones
///
/// Parsed values are truncated to whole square feet. A batch in which no
/// area parses at all is filled with 0.
pub fn impute_areas(parsed: &[Option<f64>]) -> ImputedAreas {
    let known: Vec<f64> = parsed.iter().flatten().copied().collect();
    let median = median(&known).map(|m| m.trunc() as i64).unwrap_or(0);

    let values = parsed
        .iter()
        .map(|area| area.map(|a| a.trunc() as i64).unwrap_or(median))
        .collect();

    ImputedAreas {
        values,
        median,
        imputed: parsed.len() - known.len(),
    }
}
