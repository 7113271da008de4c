use serde::Deserialize;
use std::collections::BTreeMap;

/// Browser User-Agent sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/143.0.0.0 Safari/537.36";

/// Origin prefixed to relative pagination links
pub const DEFAULT_BASE_ORIGIN: &str = "https://www.magicbricks.com";

/// City used for file naming when none is supplied
pub const DEFAULT_CITY: &str = "Bhubaneswar";

/// Main configuration structure for Listing Harvest
///
/// Every section has defaults, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub cleaner: CleanerConfig,
}

/// HTTP request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User-Agent header mimicking a desktop browser
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            headers: BTreeMap::new(),
        }
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host of the listing site, without a trailing slash
    #[serde(rename = "base-origin")]
    pub base_origin: String,

    /// Fallback city name used to derive output file names
    #[serde(rename = "default-city")]
    pub default_city: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            default_city: DEFAULT_CITY.to_string(),
        }
    }
}

/// Crawl loop configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Directory that receives raw datasets
    #[serde(rename = "raw-dir")]
    pub raw_dir: String,

    /// Optional hard ceiling on the number of pages fetched per run
    #[serde(rename = "max-pages")]
    pub max_pages: Option<u32>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            raw_dir: "data/raw".to_string(),
            max_pages: None,
        }
    }
}

/// Cleaning pass configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Directory that receives cleaned datasets
    #[serde(rename = "processed-dir")]
    pub processed_dir: String,

    /// Sample raw dataset cleaned instead when a live crawl is blocked
    #[serde(rename = "demo-raw-path")]
    pub demo_raw_path: Option<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            processed_dir: "data/processed".to_string(),
            demo_raw_path: None,
        }
    }
}
