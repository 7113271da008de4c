//! Output module for persisting datasets and reporting runs
//!
//! This module handles:
//! - Writing the raw dataset produced by a crawl
//! - Rendering the cleaned dataset produced by the cleaner
//! - Crawl and cleaning statistics

mod csv_output;
pub mod stats;

pub use csv_output::{render_cleaned_csv, write_cleaned_csv, write_raw_csv};
pub use stats::{print_clean_summary, print_crawl_summary, CleanSummary, CrawlSummary, StopReason};
