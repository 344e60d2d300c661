use std::path::PathBuf;
use std::time::Duration;
use vitrine_core::SelectorTable;

/// How long the loader waits for the catalog container before treating the
/// storefront as empty
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_DEBUGGING_PORT: u16 = 9222;

/// Settings for one scrape run
///
/// Concurrent runs must use distinct debugging ports; each run owns its own
/// Chrome process and profile.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: String,
    pub render_timeout: Duration,
    /// Checked before the platform default locations
    pub chrome_path: Option<PathBuf>,
    pub debugging_port: u16,
    pub selectors: SelectorTable,
}

impl ScrapeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            render_timeout: DEFAULT_RENDER_TIMEOUT,
            chrome_path: None,
            debugging_port: DEFAULT_DEBUGGING_PORT,
            selectors: SelectorTable::default(),
        }
    }
}
