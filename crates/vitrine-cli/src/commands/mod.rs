pub mod completion;
pub mod products;
pub mod report;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use vitrine_browser::ScrapeConfig;
use vitrine_core::SelectorTable;

/// Build the pipeline configuration shared by the scraping commands
pub(crate) fn build_config(
    url: &str,
    chrome_path: Option<PathBuf>,
    timeout_secs: u64,
    selectors: Option<PathBuf>,
    port: u16,
) -> Result<ScrapeConfig> {
    let url = normalize_url(url)?;

    let selectors = match selectors {
        Some(path) => SelectorTable::from_file(&path)
            .with_context(|| format!("failed to load selector file {}", path.display()))?,
        None => SelectorTable::default(),
    };

    let mut config = ScrapeConfig::new(url);
    config.chrome_path = chrome_path;
    config.render_timeout = Duration::from_secs(timeout_secs);
    config.debugging_port = port;
    config.selectors = selectors;

    tracing::debug!(url = %config.url, port, "scrape configuration built");
    Ok(config)
}

/// Accept bare hostnames the way shoppers type them
fn normalize_url(raw: &str) -> Result<String> {
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    url::Url::parse(&candidate).with_context(|| format!("invalid storefront URL: {}", raw))?;

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_https_scheme() {
        assert_eq!(
            normalize_url("shop.example.com").unwrap(),
            "https://shop.example.com"
        );
    }

    #[test]
    fn test_normalize_url_keeps_explicit_scheme() {
        assert_eq!(
            normalize_url("http://shop.example.com").unwrap(),
            "http://shop.example.com"
        );
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        assert!(normalize_url("not a url at all").is_err());
    }

    #[test]
    fn test_build_config_applies_overrides() {
        let config = build_config("shop.example.com", None, 3, None, 9333).unwrap();

        assert_eq!(config.url, "https://shop.example.com");
        assert_eq!(config.render_timeout, Duration::from_secs(3));
        assert_eq!(config.debugging_port, 9333);
        assert_eq!(config.selectors, SelectorTable::default());
    }

    #[test]
    fn test_build_config_reports_missing_selector_file() {
        let result = build_config(
            "shop.example.com",
            None,
            10,
            Some(PathBuf::from("/nonexistent/selectors.json")),
            9222,
        );

        assert!(result.is_err());
        assert!(
            format!("{:#}", result.unwrap_err()).contains("failed to load selector file")
        );
    }
}
