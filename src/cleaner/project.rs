//! Project name derivation
//!
//! Each record's name comes from the first strategy in
//! [`PROJECT_NAME_STRATEGIES`] that yields a value, falling back to
//! [`INDEPENDENT_PROPERTY`]. A second, batch-wide pass then decides whether the
//! column is worth emitting at all.

use crate::cleaner::text::title_case;
use crate::crawler::RawPropertyRecord;

/// Name used when nothing better can be derived
pub const INDEPENDENT_PROPERTY: &str = "Independent Property";

/// Replacement for sentinel or empty names when the column is kept
pub const NAME_NOT_AVAILABLE: &str = "Project Name Not Available";

/// Generic property words that are never accepted as a project name
const PROPERTY_WORDS: [&str; 6] = ["flat", "villa", "house", "apartment", "plot", "studio"];

/// A way of deriving a project name from one record
pub type ProjectNameStrategy = fn(&RawPropertyRecord) -> Option<String>;

/// Strategies in precedence order; the first `Some` wins
pub const PROJECT_NAME_STRATEGIES: &[ProjectNameStrategy] = &[from_society, from_title_segment];

/// Derives the project name of one record
pub fn derive_project_name(record: &RawPropertyRecord) -> String {
    PROJECT_NAME_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(record))
        .unwrap_or_else(|| INDEPENDENT_PROPERTY.to_string())
}

/// The society field, unless it is blank or a generic property word
pub fn from_society(record: &RawPropertyRecord) -> Option<String> {
    let society = record.society.trim();
    accept(society).then(|| society.to_string())
}

/// The first comma segment after " in " in the title
///
/// Only used when at least two segments follow " in ", so that a bare city is
/// not mistaken for a project.
pub fn from_title_segment(record: &RawPropertyRecord) -> Option<String> {
    let title = record.title.to_lowercase();
    let (_, location) = title.split_once(" in ")?;

    let segments: Vec<&str> = location.split(',').map(str::trim).collect();
    if segments.len() < 2 {
        return None;
    }

    let candidate = segments[0];
    accept(candidate).then(|| title_case(candidate))
}

fn accept(candidate: &str) -> bool {
    !candidate.is_empty() && !PROPERTY_WORDS.contains(&candidate.to_lowercase().as_str())
}

/// Whether a derived name carries real information
pub fn is_meaningful(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name != INDEPENDENT_PROPERTY
}

/// Applies the batch-wide column policy to the derived names
///
/// Returns `None` when no name in the batch is meaningful, meaning the column
/// is dropped. Otherwise every sentinel or empty name is replaced with
/// [`NAME_NOT_AVAILABLE`].
pub fn resolve_project_names(names: Vec<String>) -> Option<Vec<String>> {
    if !names.iter().any(|name| is_meaningful(name)) {
        return None;
    }

    Some(
        names
            .into_iter()
            .map(|name| {
                if is_meaningful(&name) {
                    name
                } else {
                    NAME_NOT_AVAILABLE.to_string()
                }
            })
            .collect(),
    )
}
