//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the sequential crawl loop:
//! - Fetching one results page at a time
//! - Extracting listing cards and accumulating records
//! - Following the "Next" link until the results run out
//! - Writing the raw dataset

use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::paginator::next_page_url;
use crate::crawler::parser::{extract_cards, RawPropertyRecord};
use crate::output::{write_raw_csv, CrawlSummary, StopReason};
use crate::Result;
use std::path::Path;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    fetcher: Fetcher,
}

impl Coordinator {
    /// Creates a new coordinator, building the HTTP client once
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config.fetcher)?;
        Ok(Self { config, fetcher })
    }

    /// Runs the crawl loop from `start_url` and writes the raw dataset to `output_path`
    ///
    /// The loop ends on the first page that yields zero cards or that has no
    /// "Next" link, whichever comes first (or at `crawler.max-pages`, when set).
    /// Fetch errors are returned as-is and nothing is written in that case.
    /// When no records were collected at all, no file is written either.
    ///
    /// Pages are fetched strictly one after another. There is no visited-URL
    /// guard: a "Next" link cycling back to an earlier page keeps the crawl
    /// going unless a page ceiling is configured.
    pub async fn run(&self, start_url: &str, output_path: &Path) -> Result<CrawlSummary> {
        let mut records: Vec<RawPropertyRecord> = Vec::new();
        let mut current_url = start_url.to_string();
        let mut page_count: u32 = 1;

        let stop_reason = loop {
            tracing::info!("Scraping page {}: {}", page_count, current_url);

            let html = self.fetcher.fetch(&current_url).await?;

            let page_records = extract_cards(&html);
            if page_records.is_empty() {
                tracing::info!("No records found on page {}, stopping", page_count);
                break StopReason::NoRecords;
            }

            tracing::debug!(
                "Extracted {} records from page {}",
                page_records.len(),
                page_count
            );
            records.extend(page_records);

            let next_url = match next_page_url(&html, &self.config.site.base_origin) {
                Some(url) => url,
                None => {
                    tracing::info!("No next page found after page {}", page_count);
                    break StopReason::NoNextPage;
                }
            };

            if let Some(max_pages) = self.config.crawler.max_pages {
                if page_count >= max_pages {
                    tracing::warn!(
                        "Reached page limit of {}, next page {} not fetched",
                        max_pages,
                        next_url
                    );
                    break StopReason::PageLimit;
                }
            }

            current_url = next_url;
            page_count += 1;
        };

        if records.is_empty() {
            tracing::warn!("No data scraped, no raw file written");
            return Ok(CrawlSummary {
                pages_fetched: page_count,
                records: 0,
                stop_reason,
                output: None,
            });
        }

        write_raw_csv(output_path, &records)?;

        tracing::info!(
            "Scraped {} properties over {} pages, raw data saved to {}",
            records.len(),
            page_count,
            output_path.display()
        );

        Ok(CrawlSummary {
            pages_fetched: page_count,
            records: records.len(),
            stop_reason,
            output: Some(output_path.to_path_buf()),
        })
    }
}

/// Runs one crawl with a freshly built coordinator
///
/// # Example
///
/// ```no_run
/// use listing_harvest::config::Config;
/// use listing_harvest::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_crawl(
///     Config::default(),
///     "https://www.magicbricks.com/flats-in-pune-pppfs",
///     Path::new("data/raw/pune_raw_data.csv"),
/// )
/// .await?;
/// println!("{} records", summary.records);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, start_url: &str, output_path: &Path) -> Result<CrawlSummary> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run(start_url, output_path).await
}
