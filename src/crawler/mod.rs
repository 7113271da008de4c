//! Crawler module for listing page retrieval and extraction
//!
//! This module contains the crawl side of the pipeline:
//! - HTTP fetching with blocked/transport error classification
//! - Listing card extraction into raw records
//! - Next-page lookup
//! - Overall crawl coordination and raw dataset output

mod coordinator;
mod fetcher;
mod paginator;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, Fetcher};
pub use paginator::next_page_url;
pub use parser::{extract_cards, CardFields, RawPropertyRecord, RAW_COLUMNS};

use crate::config::Config;
use crate::output::CrawlSummary;
use crate::Result;
use std::path::Path;

/// Runs a complete crawl operation
///
/// This is the main entry point for the crawl stage. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Fetch result pages one at a time from `start_url`
/// 3. Extract listing cards and follow "Next" links
/// 4. Write the raw dataset to `output_path`
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl finished; `output` is `None` if nothing was scraped
/// * `Err(HarvestError)` - A page could not be fetched (`Blocked` on HTTP 403)
pub async fn crawl(config: Config, start_url: &str, output_path: &Path) -> Result<CrawlSummary> {
    run_crawl(config, start_url, output_path).await
}
