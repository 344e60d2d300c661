use crate::{BrowserSession, PageLoader, Result, ScrapeConfig};
use vitrine_core::extract::extract_records;
use vitrine_core::record::Catalog;
use vitrine_core::report::format_report;

/// The scrape-extract-report sequence with the browser release bracket
///
/// One invocation, one browser session. The session is released on every
/// path that acquired one: normal completion, render timeout, and fatal
/// navigation failure alike. Only driver-init and navigation failures
/// surface to the caller; everything else degrades to a smaller catalog.
pub struct ScrapePipeline {
    config: ScrapeConfig,
}

impl ScrapePipeline {
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Catalog query interface: the ordered records for the current page
    /// state of the storefront
    pub async fn collect_catalog(&self) -> Result<Catalog> {
        let mut session = BrowserSession::acquire(&self.config).await?;

        let outcome = self.drive(&session).await;
        session.release().await;

        outcome
    }

    /// Report query interface: the catalog rendered as the fixed text report
    pub async fn collect_report(&self) -> Result<String> {
        let catalog = self.collect_catalog().await?;
        Ok(format_report(&catalog))
    }

    async fn drive(&self, session: &BrowserSession) -> Result<Catalog> {
        let loader = PageLoader::new(session.page().clone(), self.config.selectors.clone());

        loader.navigate(&self.config.url).await?;

        if !loader.wait_for_catalog(self.config.render_timeout).await {
            tracing::warn!(
                timeout_secs = self.config.render_timeout.as_secs(),
                "catalog did not render in time, treating storefront as empty"
            );
            return Ok(Catalog::new());
        }

        let items = loader.harvest_items().await;
        Ok(extract_records(items))
    }
}
