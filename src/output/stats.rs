//! Run statistics for crawls and cleaning passes
//!
//! Both entry points return one of these summaries; the CLI prints them.

use std::fmt;
use std::path::PathBuf;

/// Why the crawl loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page produced zero listing cards
    NoRecords,
    /// A page had no "Next" control
    NoNextPage,
    /// The configured page ceiling was reached
    PageLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::NoRecords => write!(f, "no records, stopping"),
            StopReason::NoNextPage => write!(f, "no next page"),
            StopReason::PageLimit => write!(f, "page limit reached"),
        }
    }
}

/// Outcome of one crawl run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Number of pages fetched, including the one that ended the crawl
    pub pages_fetched: u32,

    /// Number of listing records accumulated
    pub records: usize,

    pub stop_reason: StopReason,

    /// Raw dataset written; `None` when nothing was scraped
    pub output: Option<PathBuf>,
}

/// Outcome of one cleaning pass
#[derive(Debug, Clone, PartialEq)]
pub struct CleanSummary {
    pub rows: usize,

    /// Median carpet area used to fill missing values
    pub median_area_sqft: i64,

    /// Rows whose carpet area was imputed
    pub imputed_areas: usize,

    /// Rows without a usable price
    pub missing_prices: usize,

    /// Whether the project_name column survived the batch-wide check
    pub project_name_kept: bool,

    pub output: PathBuf,
}

/// Prints a crawl summary to stdout
pub fn print_crawl_summary(summary: &CrawlSummary) {
    println!("=== Crawl Summary ===\n");
    println!("  Pages fetched: {}", summary.pages_fetched);
    println!("  Records scraped: {}", summary.records);
    println!("  Stopped because: {}", summary.stop_reason);
    match &summary.output {
        Some(path) => println!("  Raw data saved to: {}", path.display()),
        None => println!("  No data scraped, nothing written"),
    }
}

/// Prints a cleaning summary to stdout
pub fn print_clean_summary(summary: &CleanSummary) {
    println!("=== Cleaning Summary ===\n");
    println!("  Rows: {}", summary.rows);
    println!(
        "  Carpet area median: {} sqft ({} imputed)",
        summary.median_area_sqft, summary.imputed_areas
    );
    println!("  Rows without price: {}", summary.missing_prices);
    println!(
        "  Project name column: {}",
        if summary.project_name_kept {
            "kept"
        } else {
            "dropped"
        }
    );
    println!("  Cleaned data saved to: {}", summary.output.display());
}
