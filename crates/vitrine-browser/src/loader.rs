use crate::{Error, Result};
use chromiumoxide::Page;
use chromiumoxide::element::Element;
use std::time::Duration;
use vitrine_core::SelectorTable;
use vitrine_core::extract::RawItem;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Drives one page: navigation, bounded wait for the catalog, and raw field
/// harvesting
pub struct PageLoader {
    page: Page,
    selectors: SelectorTable,
}

impl PageLoader {
    pub fn new(page: Page, selectors: SelectorTable) -> Self {
        Self { page, selectors }
    }

    /// Load the storefront page; any failure here is fatal for the run
    pub async fn navigate(&self, url: &str) -> Result<()> {
        tracing::info!(url, "navigating to storefront");

        self.page
            .goto(url)
            .await
            .map_err(|e| Error::Navigation(format!("failed to load {}: {}", url, e)))?;

        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| Error::Navigation(format!("page load did not settle: {}", e)))?;

        Ok(())
    }

    /// Poll for the catalog container until it renders or `timeout` elapses
    ///
    /// A timeout is not an error: the caller proceeds with an empty catalog.
    /// Query failures while polling count as "not rendered yet".
    pub async fn wait_for_catalog(&self, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            if self.page.find_element(self.selectors.item.as_str()).await.is_ok() {
                tracing::debug!(selector = %self.selectors.item, "catalog rendered");
                return true;
            }

            if tokio::time::Instant::now() + POLL_INTERVAL > deadline {
                return false;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Read the raw field texts of every catalog element, in document order
    ///
    /// Sub-field queries that fail are recorded as `None`; the record policy
    /// in vitrine-core decides what that means. A failed container query
    /// yields an empty harvest, never an error.
    pub async fn harvest_items(&self) -> Vec<RawItem> {
        let elements = match self.page.find_elements(self.selectors.item.as_str()).await {
            Ok(elements) => elements,
            Err(e) => {
                tracing::debug!("catalog element query failed: {}", e);
                return Vec::new();
            }
        };

        tracing::debug!(count = elements.len(), "harvesting catalog elements");

        let mut items = Vec::with_capacity(elements.len());
        for element in &elements {
            items.push(RawItem {
                name: Self::field_text(element, &self.selectors.name).await,
                price: Self::field_text(element, &self.selectors.price).await,
                stock: Self::field_text(element, &self.selectors.stock).await,
            });
        }

        items
    }

    async fn field_text(element: &Element, selector: &str) -> Option<String> {
        let field = element.find_element(selector).await.ok()?;
        let text = field.inner_text().await.ok().flatten()?;
        Some(text.trim().to_string())
    }
}
