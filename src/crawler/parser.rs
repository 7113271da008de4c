//! Listing card extraction
//!
//! This module reads one results page and turns every listing card into a
//! [`RawPropertyRecord`]. It does not fetch pages, follow pagination, or write
//! files.
//!
//! Extraction happens in two separate steps:
//! 1. lookup: each field is located by its structural marker and yields
//!    `Option<String>` ([`CardFields`])
//! 2. defaulting: [`CardFields::into_record`] turns every absent field into an
//!    empty string
//!
//! A missing node only ever affects its own field; sibling fields and sibling
//! cards are unaffected.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Marker of the element wrapping one listing
const CARD_SELECTOR: &str = "div.mb-srp__list";

static CARD: LazyLock<Selector> = LazyLock::new(|| Selector::parse(CARD_SELECTOR).unwrap());

/// One listing as it appears on the results page
///
/// Every field is always present (possibly empty) and the field order is fixed,
/// so the CSV header written from the first record fits every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPropertyRecord {
    pub title: String,
    pub price: String,
    pub carpet_area: String,
    pub furnishing: String,
    pub status: String,
    pub society: String,
    pub car_parking: String,
    pub bathrooms: String,
}

/// Column names of the raw dataset, in serialization order
pub const RAW_COLUMNS: [&str; 8] = [
    "title",
    "price",
    "carpet_area",
    "furnishing",
    "status",
    "society",
    "car_parking",
    "bathrooms",
];

/// Where a field lives inside a card
///
/// When `scope` is set, the first element of the card matching it is located
/// first and `target` is searched inside it.
struct FieldMarker {
    scope: Option<Selector>,
    target: Selector,
}

impl FieldMarker {
    fn direct(target: &str) -> Self {
        Self {
            scope: None,
            target: selector(target),
        }
    }

    fn summary_value(summary: &str) -> Self {
        Self::in_summary(summary, "div.mb-srp__card__summary--value")
    }

    fn summary_label(summary: &str) -> Self {
        Self::in_summary(summary, "div.mb-srp__card__summary--label")
    }

    fn in_summary(summary: &str, target: &str) -> Self {
        Self {
            scope: Some(selector(&format!("div[data-summary=\"{}\"]", summary))),
            target: selector(target),
        }
    }

    /// Looks the field up inside `card`; `None` when any step is missing
    fn lookup(&self, card: ElementRef<'_>) -> Option<String> {
        let scope = match &self.scope {
            Some(scope) => card.select(scope).next()?,
            None => card,
        };

        let element = scope.select(&self.target).next()?;
        Some(element.text().collect::<String>().trim().to_string())
    }
}

fn selector(source: &str) -> Selector {
    Selector::parse(source).unwrap()
}

/// Markers of every raw field, parsed once
struct CardMarkers {
    title: FieldMarker,
    price: FieldMarker,
    carpet_area: FieldMarker,
    furnishing: FieldMarker,
    status: FieldMarker,
    society: FieldMarker,
    parking: FieldMarker,
    bathroom: FieldMarker,
}

static MARKERS: LazyLock<CardMarkers> = LazyLock::new(|| CardMarkers {
    title: FieldMarker::direct("h2.mb-srp__card--title"),
    price: FieldMarker::direct("div.mb-srp__card__price--amount"),
    carpet_area: FieldMarker::summary_value("carpet-area"),
    furnishing: FieldMarker::summary_value("furnishing"),
    status: FieldMarker::summary_label("status"),
    society: FieldMarker::summary_value("society"),
    parking: FieldMarker::summary_value("parking"),
    bathroom: FieldMarker::summary_value("bathroom"),
});

/// Result of looking up every field of one card, before defaulting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub title: Option<String>,
    pub price: Option<String>,
    pub carpet_area: Option<String>,
    pub furnishing: Option<String>,
    pub status: Option<String>,
    pub society: Option<String>,
    pub car_parking: Option<String>,
    pub bathrooms: Option<String>,
}

impl CardFields {
    /// Looks up each field of `card` independently
    pub fn lookup(card: ElementRef<'_>) -> Self {
        let markers = &*MARKERS;
        Self {
            title: markers.title.lookup(card),
            price: markers.price.lookup(card),
            carpet_area: markers.carpet_area.lookup(card),
            furnishing: markers.furnishing.lookup(card),
            status: markers.status.lookup(card),
            society: markers.society.lookup(card),
            car_parking: markers.parking.lookup(card),
            bathrooms: markers.bathroom.lookup(card),
        }
    }

    /// Applies the empty-string default to every absent field
    pub fn into_record(self) -> RawPropertyRecord {
        RawPropertyRecord {
            title: self.title.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            carpet_area: self.carpet_area.unwrap_or_default(),
            furnishing: self.furnishing.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            society: self.society.unwrap_or_default(),
            car_parking: self.car_parking.unwrap_or_default(),
            bathrooms: self.bathrooms.unwrap_or_default(),
        }
    }
}

/// Extracts every listing card on a results page
///
/// Returns an empty vector when the page has no cards; the crawl loop treats
/// that as the end of the results.
///
/// # Example
///
/// ```
/// use listing_harvest::crawler::extract_cards;
///
/// let html = r#"<div class="mb-srp__list">
///     <h2 class="mb-srp__card--title">2 BHK Flat for Sale in Baner, Pune</h2>
/// </div>"#;
/// let records = extract_cards(html);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].title, "2 BHK Flat for Sale in Baner, Pune");
/// assert_eq!(records[0].price, "");
/// ```
pub fn extract_cards(html: &str) -> Vec<RawPropertyRecord> {
    let document = Html::parse_document(html);

    document
        .select(&CARD)
        .map(|card| CardFields::lookup(card).into_record())
        .collect()
}
