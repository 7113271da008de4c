//! Normalization engine for scraped listings
//!
//! Turns a raw dataset into the cleaned, typed dataset. The pipeline is
//! batch-wide rather than row-local: carpet areas are imputed with the median
//! of the whole batch, and the project_name column is only emitted when at
//! least one row has a meaningful name. Both decisions need the full batch,
//! so cleaning runs in two passes:
//!
//! 1. derive every per-row value (price, area, title fields, project name,
//!    location, categoricals) and collect the batch aggregates
//! 2. apply the median fill and the project-name column policy, then project
//!    into the fixed output column order
//!
//! Cleaning is deterministic: the same raw file always produces byte-identical
//! output.

mod area;
mod location;
mod price;
mod project;
mod text;
mod title;

pub use area::{impute_areas, median, parse_area_sqft, ImputedAreas};
pub use location::{extract_location, Location, LOCATION_STRATEGIES, UNKNOWN};
pub use price::{parse_price_inr, price_lakh, price_per_sqft, CRORE, LAKH};
pub use project::{
    derive_project_name, is_meaningful, resolve_project_names, INDEPENDENT_PROPERTY,
    NAME_NOT_AVAILABLE, PROJECT_NAME_STRATEGIES,
};
pub use text::{normalize_category, title_case, DEFAULT_FURNISHING, DEFAULT_STATUS};
pub use title::{extract_bhk, extract_listing_type, extract_property_type};

use crate::config::CleanerConfig;
use crate::crawler::RawPropertyRecord;
use crate::output::{render_cleaned_csv, CleanSummary};
use crate::{HarvestError, Result};
use std::fs;
use std::path::Path;

/// Output columns in their fixed order
pub const CLEANED_COLUMNS: [&str; 12] = [
    "project_name",
    "property_type",
    "listing_type",
    "city",
    "locality",
    "furnishing",
    "status",
    "bhk",
    "bathrooms",
    "price_lakh",
    "carpet_area_sqft",
    "price_per_sqft",
];

/// Raw columns the cleaner cannot work without
const REQUIRED_COLUMNS: [&str; 6] = [
    "title",
    "price",
    "carpet_area",
    "furnishing",
    "status",
    "bathrooms",
];

/// One listing after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedPropertyRecord {
    pub project_name: String,
    pub property_type: String,
    pub listing_type: String,
    pub city: String,
    pub locality: String,
    pub furnishing: String,
    pub status: String,
    pub bhk: u32,
    pub bathrooms: String,
    /// `None` when the price was missing or unparseable
    pub price_lakh: Option<i64>,
    pub carpet_area_sqft: i64,
    pub price_per_sqft: f64,
}

impl CleanedPropertyRecord {
    /// Cell values in [`CLEANED_COLUMNS`] order
    fn cells(&self, include_project_name: bool) -> Vec<String> {
        let mut cells = Vec::with_capacity(CLEANED_COLUMNS.len());
        if include_project_name {
            cells.push(self.project_name.clone());
        }
        cells.extend([
            self.property_type.clone(),
            self.listing_type.clone(),
            self.city.clone(),
            self.locality.clone(),
            self.furnishing.clone(),
            self.status.clone(),
            self.bhk.to_string(),
            self.bathrooms.clone(),
            self.price_lakh.map(|p| p.to_string()).unwrap_or_default(),
            self.carpet_area_sqft.to_string(),
            format_decimal(self.price_per_sqft),
        ]);
        cells
    }
}

/// A cleaned batch together with its batch-wide decisions
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedDataset {
    pub records: Vec<CleanedPropertyRecord>,

    /// False when no record had a meaningful project name
    pub include_project_name: bool,

    pub median_area_sqft: i64,
    pub imputed_areas: usize,
    pub missing_prices: usize,
}

impl CleanedDataset {
    /// Header of the output file
    pub fn columns(&self) -> Vec<&'static str> {
        CLEANED_COLUMNS
            .iter()
            .copied()
            .filter(|column| self.include_project_name || *column != "project_name")
            .collect()
    }

    /// Output rows as strings, aligned with [`CleanedDataset::columns`]
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records
            .iter()
            .map(|record| record.cells(self.include_project_name))
    }
}

/// Per-row values derived in the first pass
struct RowDraft {
    price_inr: Option<f64>,
    carpet_area: Option<f64>,
    bhk: u32,
    property_type: String,
    listing_type: String,
    project_name: String,
    location: Location,
    furnishing: String,
    status: String,
    bathrooms: String,
}

impl RowDraft {
    fn derive(raw: &RawPropertyRecord) -> Self {
        let price_inr = parse_price_inr(&raw.price);
        if price_inr.is_none() && !raw.price.trim().is_empty() {
            tracing::warn!("Unrecognized price '{}', leaving it empty", raw.price);
        }

        Self {
            price_inr,
            carpet_area: parse_area_sqft(&raw.carpet_area),
            bhk: extract_bhk(&raw.title),
            property_type: extract_property_type(&raw.title),
            listing_type: extract_listing_type(&raw.title),
            project_name: derive_project_name(raw),
            location: extract_location(&raw.title),
            furnishing: normalize_category(&raw.furnishing, DEFAULT_FURNISHING),
            status: normalize_category(&raw.status, DEFAULT_STATUS),
            bathrooms: raw.bathrooms.clone(),
        }
    }
}

/// Runs the full normalization pipeline over one batch
pub fn clean_records(raw: &[RawPropertyRecord]) -> CleanedDataset {
    // First pass: row-local derivations
    let drafts: Vec<RowDraft> = raw.iter().map(RowDraft::derive).collect();

    // Batch aggregates
    let parsed_areas: Vec<Option<f64>> = drafts.iter().map(|d| d.carpet_area).collect();
    let areas = impute_areas(&parsed_areas);

    let names: Vec<String> = drafts.iter().map(|d| d.project_name.clone()).collect();
    let resolved_names = resolve_project_names(names);
    let include_project_name = resolved_names.is_some();

    let missing_prices = drafts.iter().filter(|d| d.price_inr.is_none()).count();

    // Second pass: apply batch decisions
    let records = drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| {
            let carpet_area_sqft = areas.values[i];
            let project_name = resolved_names
                .as_ref()
                .map(|names| names[i].clone())
                .unwrap_or_default();

            CleanedPropertyRecord {
                project_name,
                property_type: draft.property_type,
                listing_type: draft.listing_type,
                city: draft.location.city,
                locality: draft.location.locality,
                furnishing: draft.furnishing,
                status: draft.status,
                bhk: draft.bhk,
                bathrooms: draft.bathrooms,
                price_lakh: draft.price_inr.map(price_lakh),
                carpet_area_sqft,
                price_per_sqft: price_per_sqft(draft.price_inr, carpet_area_sqft),
            }
        })
        .collect();

    CleanedDataset {
        records,
        include_project_name,
        median_area_sqft: areas.median,
        imputed_areas: areas.imputed,
        missing_prices,
    }
}

/// Reads a raw dataset written by the crawler
///
/// Header names are matched case-insensitively. `society` and `car_parking`
/// may be absent; every other raw column is required.
///
/// # Errors
///
/// Returns `DataFormat` when the file is missing, is not valid CSV, or lacks a
/// required column.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawPropertyRecord>> {
    let data_error =
        |e: csv::Error| HarvestError::DataFormat(format!("cannot read {}: {}", path.display(), e));

    let mut reader = csv::Reader::from_path(path).map_err(data_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(data_error)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect();

    let position = |name: &str| headers.iter().position(|h| h == name);

    for column in REQUIRED_COLUMNS {
        if position(column).is_none() {
            return Err(HarvestError::DataFormat(format!(
                "{} is missing required column '{}'",
                path.display(),
                column
            )));
        }
    }

    let title = position("title");
    let price = position("price");
    let carpet_area = position("carpet_area");
    let furnishing = position("furnishing");
    let status = position("status");
    let society = position("society");
    let car_parking = position("car_parking");
    let bathrooms = position("bathrooms");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(data_error)?;
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        };

        records.push(RawPropertyRecord {
            title: cell(title),
            price: cell(price),
            carpet_area: cell(carpet_area),
            furnishing: cell(furnishing),
            status: cell(status),
            society: cell(society),
            car_parking: cell(car_parking),
            bathrooms: cell(bathrooms),
        });
    }

    Ok(records)
}

/// Cleans the raw dataset at `raw_path` into `<processed_dir>/<output_name>`
///
/// The whole output is rendered in memory first, so a failure never leaves a
/// partially written cleaned file behind.
///
/// # Example
///
/// ```no_run
/// use listing_harvest::cleaner::clean_data;
/// use listing_harvest::config::CleanerConfig;
/// use std::path::Path;
///
/// let summary = clean_data(
///     Path::new("data/raw/pune_raw_data.csv"),
///     "pune_cleaned_data.csv",
///     &CleanerConfig::default(),
/// )
/// .unwrap();
/// println!("{} rows", summary.rows);
/// ```
pub fn clean_data(raw_path: &Path, output_name: &str, config: &CleanerConfig) -> Result<CleanSummary> {
    let raw = load_raw_records(raw_path)?;
    tracing::info!("Loaded {} raw records from {}", raw.len(), raw_path.display());

    let dataset = clean_records(&raw);
    let rendered = render_cleaned_csv(&dataset)?;

    let processed_dir = Path::new(&config.processed_dir);
    fs::create_dir_all(processed_dir)?;
    let output = processed_dir.join(output_name);
    fs::write(&output, rendered)?;

    if dataset.include_project_name {
        tracing::debug!("Keeping project_name column");
    } else {
        tracing::info!("No meaningful project names, dropping project_name column");
    }
    tracing::info!(
        "Cleaned {} records (median area {} sqft, {} imputed), saved to {}",
        dataset.records.len(),
        dataset.median_area_sqft,
        dataset.imputed_areas,
        output.display()
    );

    Ok(CleanSummary {
        rows: dataset.records.len(),
        median_area_sqft: dataset.median_area_sqft,
        imputed_areas: dataset.imputed_areas,
        missing_prices: dataset.missing_prices,
        project_name_kept: dataset.include_project_name,
        output,
    })
}

/// Renders a float with at least one decimal place (`0.0`, `8500.0`, `14117.65`)
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
