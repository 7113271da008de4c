//! Listing Harvest main entry point
//!
//! This is the command-line interface for the listing crawler and cleaner.

use anyhow::Context;
use clap::{Parser, Subcommand};
use listing_harvest::cleaner::clean_data;
use listing_harvest::config::{load_config_with_hash, CleanerConfig, Config};
use listing_harvest::crawler::crawl;
use listing_harvest::output::{print_clean_summary, print_crawl_summary};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Listing Harvest: crawl property search results and clean them into a dataset
///
/// `crawl` walks the paginated results from a search URL and writes a raw CSV,
/// `clean` normalizes a raw CSV, and `pipeline` does both in one go.
#[derive(Parser, Debug)]
#[command(name = "listing-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Crawl property listings and clean them into a dataset", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl search results into a raw CSV file
    Crawl {
        /// First search results page
        url: String,

        /// City name used for the output file name
        #[arg(long)]
        city: Option<String>,

        /// Explicit output path, overriding the city-based name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clean a raw CSV file into the processed directory
    Clean {
        /// Raw CSV produced by `crawl`
        raw: PathBuf,

        /// File name of the cleaned CSV
        #[arg(long, default_value = "magicbricks_clean.csv")]
        output_name: String,
    },

    /// Crawl, then clean the result
    Pipeline {
        /// First search results page
        url: String,

        /// City name used for the output file names
        #[arg(long)]
        city: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    match cli.command {
        Command::Crawl { url, city, output } => {
            let output = output.unwrap_or_else(|| raw_path(&config, city.as_deref()));
            handle_crawl(config, &url, &output).await?;
        }
        Command::Clean { raw, output_name } => {
            handle_clean(&config.cleaner, &raw, &output_name)?;
        }
        Command::Pipeline { url, city } => {
            handle_pipeline(config, &url, city.as_deref()).await?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("listing_harvest=info,warn"),
            1 => EnvFilter::new("listing_harvest=debug,info"),
            2 => EnvFilter::new("listing_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Lower-cased city name, falling back to the configured default city
fn city_slug(config: &Config, city: Option<&str>) -> String {
    city.map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(&config.site.default_city)
        .to_lowercase()
}

/// `<raw-dir>/<city>_raw_data.csv`
fn raw_path(config: &Config, city: Option<&str>) -> PathBuf {
    Path::new(&config.crawler.raw_dir).join(format!("{}_raw_data.csv", city_slug(config, city)))
}

/// Handles the `crawl` subcommand
async fn handle_crawl(config: Config, url: &str, output: &Path) -> anyhow::Result<()> {
    tracing::info!("Starting crawl from {}", url);

    let summary = crawl(config, url, output)
        .await
        .with_context(|| format!("Crawl from {} failed", url))?;

    print_crawl_summary(&summary);
    Ok(())
}

/// Handles the `clean` subcommand
fn handle_clean(cleaner: &CleanerConfig, raw: &Path, output_name: &str) -> anyhow::Result<()> {
    tracing::info!("Cleaning {}", raw.display());

    let summary = clean_data(raw, output_name, cleaner)
        .with_context(|| format!("Cleaning {} failed", raw.display()))?;

    print_clean_summary(&summary);
    Ok(())
}

/// Cleaned file name for a demo dataset, derived from the demo file itself
///
/// `sample_mumbai_raw_data.csv` becomes `sample_mumbai_cleaned_data.csv`; any
/// other stem gets `_cleaned_data.csv` appended.
fn demo_output_name(demo: &Path) -> String {
    let stem = demo
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("sample");
    let stem = stem.strip_suffix("_raw_data").unwrap_or(stem);
    format!("{}_cleaned_data.csv", stem)
}

/// Handles the `pipeline` subcommand
///
/// When the site blocks the crawl and a demo dataset is configured, the demo
/// dataset is cleaned instead so the rest of the pipeline can still be shown.
async fn handle_pipeline(config: Config, url: &str, city: Option<&str>) -> anyhow::Result<()> {
    let slug = city_slug(&config, city);
    let raw = raw_path(&config, city);
    let cleaner_config = config.cleaner.clone();

    tracing::info!("Starting scraping process");
    match crawl(config, url, &raw).await {
        Ok(summary) => {
            print_crawl_summary(&summary);
            if summary.output.is_none() {
                println!("\nNothing to clean");
                return Ok(());
            }

            tracing::info!("Starting cleaning process");
            let output_name = format!("{}_cleaned_data.csv", slug);
            handle_clean(&cleaner_config, &raw, &output_name)?;
        }
        Err(e) if e.is_blocked() => {
            let demo = cleaner_config
                .demo_raw_path
                .clone()
                .ok_or(e)
                .context("Live scraping was blocked and no demo dataset is configured")?;

            tracing::warn!("Live scraping blocked (HTTP 403), switching to demo data {}", demo);
            let demo = Path::new(&demo);
            handle_clean(&cleaner_config, demo, &demo_output_name(demo))?;
        }
        Err(e) => return Err(e).with_context(|| format!("Crawl from {} failed", url)),
    }

    println!("\nPipeline completed successfully");
    Ok(())
}
