//! Locality and city derivation from the listing title
//!
//! The location is the part of the title after " in ". It is handed to each
//! strategy in [`LOCATION_STRATEGIES`] in turn; the first match wins.

/// Value used for both fields when no location can be derived
pub const UNKNOWN: &str = "Unknown";

const NEW_DELHI: &str = "New Delhi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub locality: String,
    pub city: String,
}

impl Location {
    fn new(locality: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            locality: locality.into(),
            city: city.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN)
    }
}

/// A way of splitting the location text into locality and city
pub type LocationStrategy = fn(&str) -> Option<Location>;

/// Strategies in precedence order; the first `Some` wins
pub const LOCATION_STRATEGIES: &[LocationStrategy] =
    &[new_delhi_suffix, comma_segments, whitespace_split];

/// Derives locality and city from a listing title
pub fn extract_location(title: &str) -> Location {
    let location = match title.split_once(" in ") {
        Some((_, rest)) => rest.trim(),
        None => return Location::unknown(),
    };

    LOCATION_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(location))
        .unwrap_or_else(Location::unknown)
}

fn segments(location: &str) -> Vec<&str> {
    location.split(',').map(str::trim).collect()
}

/// `..., <locality>, New Delhi`: the two-word city would confuse the whitespace split
pub fn new_delhi_suffix(location: &str) -> Option<Location> {
    if !location.ends_with(NEW_DELHI) {
        return None;
    }

    let parts = segments(location);
    let locality = if parts.len() >= 2 {
        parts[parts.len() - 2]
    } else {
        UNKNOWN
    };

    Some(Location::new(locality, NEW_DELHI))
}

/// `..., <locality>, <city>`
pub fn comma_segments(location: &str) -> Option<Location> {
    let parts = segments(location);
    if parts.len() < 2 {
        return None;
    }

    Some(Location::new(parts[parts.len() - 2], parts[parts.len() - 1]))
}

/// `<locality words> <city>` with no commas at all
pub fn whitespace_split(location: &str) -> Option<Location> {
    let words: Vec<&str> = location.split_whitespace().collect();
    let (city, locality) = words.split_last()?;

    if locality.is_empty() {
        return None;
    }

    Some(Location::new(locality.join(" "), *city))
}
