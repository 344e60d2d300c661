use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CSS selectors identifying the catalog container and the fields within an item
///
/// When the storefront's class names change, extraction degrades to fewer
/// or emptier records instead of failing; adapting to a markup change is a
/// selector-file edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorTable {
    /// Matches every product entry; its presence also signals the catalog has rendered
    pub item: String,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self {
            item: ".product-item".to_string(),
            name: ".product-name".to_string(),
            price: ".product-price".to_string(),
            stock: ".product-stock".to_string(),
        }
    }
}

impl SelectorTable {
    /// Load a selector table from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let table: SelectorTable = serde_json::from_str(&content)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        for (field, selector) in [
            ("item", &self.item),
            ("name", &self.name),
            ("price", &self.price),
            ("stock", &self.stock),
        ] {
            if selector.trim().is_empty() {
                return Err(Error::InvalidSelector(format!(
                    "selector for '{}' is empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_selectors_match_storefront_markup() {
        let table = SelectorTable::default();

        assert_eq!(table.item, ".product-item");
        assert_eq!(table.name, ".product-name");
        assert_eq!(table.price, ".product-price");
        assert_eq!(table.stock, ".product-stock");
    }

    #[test]
    fn test_from_file_reads_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"item": ".card", "name": ".card-title", "price": ".card-price", "stock": ".card-stock"}}"#
        )
        .unwrap();

        let table = SelectorTable::from_file(file.path()).unwrap();

        assert_eq!(table.item, ".card");
        assert_eq!(table.name, ".card-title");
    }

    #[test]
    fn test_from_file_rejects_empty_selector() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"item": "", "name": ".n", "price": ".p", "stock": ".s"}}"#
        )
        .unwrap();

        let result = SelectorTable::from_file(file.path());

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("selector for 'item' is empty")
        );
    }

    #[test]
    fn test_from_file_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"item": ".a", "name": ".b", "price": ".c", "stock": ".d", "rating": ".e"}}"#
        )
        .unwrap();

        assert!(SelectorTable::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_missing_file_is_io_error() {
        let result = SelectorTable::from_file("/nonexistent/selectors.json");

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
