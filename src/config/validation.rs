use crate::config::types::{CleanerConfig, Config, CrawlerConfig, FetcherConfig, SiteConfig};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_cleaner_config(&config.cleaner)?;
    Ok(())
}

/// Validates request configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if HeaderValue::from_str(&config.user_agent).is_err() {
        return Err(ConfigError::Validation(format!(
            "user_agent is not a valid header value: '{}'",
            config.user_agent
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    for (name, value) in &config.headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid header name: '{}'",
                name
            )));
        }
        if HeaderValue::from_str(value).is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid value for header '{}': '{}'",
                name, value
            )));
        }
    }

    Ok(())
}

/// Validates the site origin and default city
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_base_origin(&config.base_origin)?;

    if config.default_city.trim().is_empty() {
        return Err(ConfigError::Validation(
            "default_city cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawl loop configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.raw_dir.is_empty() {
        return Err(ConfigError::Validation("raw_dir cannot be empty".to_string()));
    }

    if config.max_pages == Some(0) {
        return Err(ConfigError::Validation(
            "max_pages must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates cleaning configuration
fn validate_cleaner_config(config: &CleanerConfig) -> Result<(), ConfigError> {
    if config.processed_dir.is_empty() {
        return Err(ConfigError::Validation(
            "processed_dir cannot be empty".to_string(),
        ));
    }

    if matches!(config.demo_raw_path.as_deref(), Some("")) {
        return Err(ConfigError::Validation(
            "demo_raw_path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates the origin that pagination paths are appended to
///
/// Next-page links are joined by plain concatenation, so the origin must be an
/// http(s) URL with no path and no trailing slash.
fn validate_base_origin(origin: &str) -> Result<(), ConfigError> {
    let url = Url::parse(origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_origin '{}': {}", origin, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_origin '{}' must use http or https",
            origin
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_origin '{}' has no host",
            origin
        )));
    }

    if origin.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base_origin '{}' must not end with '/'",
            origin
        )));
    }

    if url.path() != "/" || url.query().is_some() {
        return Err(ConfigError::Validation(format!(
            "base_origin '{}' must not contain a path or query",
            origin
        )));
    }

    Ok(())
}
