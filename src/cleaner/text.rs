//! Text helpers shared by the cleaning stages

/// Default for a listing without furnishing information
pub const DEFAULT_FURNISHING: &str = "Unfurnished";

/// Default for a listing without a construction status
pub const DEFAULT_STATUS: &str = "Unknown";

/// Title-cases `text` word by word
///
/// A letter is upper-cased when the character before it is not a letter and
/// lower-cased otherwise, so `semi-furnished` becomes `Semi-Furnished`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Title-cases a categorical value, substituting `default` when it is blank
pub fn normalize_category(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        title_case(trimmed)
    }
}
