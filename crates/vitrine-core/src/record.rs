use serde::Serialize;

/// Placeholder stored in `stock` when the field could not be read from the page
pub const STOCK_UNAVAILABLE: &str = "information unavailable";

/// A single product entry as it appeared on the rendered storefront page
///
/// `price` is the formatted text shown to shoppers (currency symbol included)
/// and is never parsed numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductRecord {
    pub fn new(name: String, price: String, stock: String) -> Self {
        Self { name, price, stock }
    }
}

/// Products in source document order; no deduplication, no identity beyond position
pub type Catalog = Vec<ProductRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_to_flat_json() {
        let record = ProductRecord::new(
            "Sofa".to_string(),
            "R$100".to_string(),
            "5".to_string(),
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Sofa");
        assert_eq!(json["price"], "R$100");
        assert_eq!(json["stock"], "5");
    }
}
