use crate::record::{Catalog, ProductRecord, STOCK_UNAVAILABLE};

/// Field texts harvested from one catalog element, before the record policy
/// is applied
///
/// `None` records a sub-field query that failed against the live DOM, which
/// keeps the skip-vs-substitute decision out of the browser layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
}

/// Turn harvested items into product records, preserving document order
///
/// `name` and `price` are required: an item missing either is logged and
/// skipped, and the rest of the batch continues. A missing `stock` is not
/// grounds for skipping; the record is kept with [`STOCK_UNAVAILABLE`] in
/// its place. One bad element never aborts the batch.
pub fn extract_records(items: Vec<RawItem>) -> Catalog {
    let total = items.len();
    let mut records = Vec::with_capacity(total);

    for (position, item) in items.into_iter().enumerate() {
        let (name, price) = match (item.name, item.price) {
            (Some(name), Some(price)) => (name, price),
            (name, price) => {
                tracing::warn!(
                    position,
                    missing_name = name.is_none(),
                    missing_price = price.is_none(),
                    "skipping catalog element with missing required field"
                );
                continue;
            }
        };

        let stock = match item.stock {
            Some(stock) => stock,
            None => {
                tracing::debug!(position, "stock not present, substituting placeholder");
                STOCK_UNAVAILABLE.to_string()
            }
        };

        records.push(ProductRecord::new(name, price, stock));
    }

    tracing::info!(
        collected = records.len(),
        skipped = total - records.len(),
        "extraction complete"
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: Option<&str>, price: Option<&str>, stock: Option<&str>) -> RawItem {
        RawItem {
            name: name.map(String::from),
            price: price.map(String::from),
            stock: stock.map(String::from),
        }
    }

    #[test]
    fn test_complete_item_becomes_record() {
        let records = extract_records(vec![item(Some("Sofa"), Some("R$100"), Some("5"))]);

        assert_eq!(
            records,
            vec![ProductRecord::new(
                "Sofa".to_string(),
                "R$100".to_string(),
                "5".to_string()
            )]
        );
    }

    #[test]
    fn test_missing_name_skips_only_that_element() {
        let records = extract_records(vec![
            item(Some("Sofa"), Some("R$100"), Some("5")),
            item(None, Some("R$200"), Some("2")),
            item(Some("Table"), Some("R$300"), Some("1")),
        ]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Sofa");
        assert_eq!(records[1].name, "Table");
    }

    #[test]
    fn test_missing_price_skips_only_that_element() {
        let records = extract_records(vec![
            item(Some("Sofa"), None, Some("5")),
            item(Some("Table"), Some("R$300"), None),
        ]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Table");
    }

    #[test]
    fn test_missing_stock_substitutes_placeholder() {
        let records = extract_records(vec![item(Some("Sofa"), Some("R$100"), None)]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Sofa");
        assert_eq!(records[0].price, "R$100");
        assert_eq!(records[0].stock, STOCK_UNAVAILABLE);
    }

    #[test]
    fn test_batch_of_bad_elements_never_aborts() {
        let records = extract_records(vec![
            item(None, None, None),
            item(None, Some("R$1"), None),
            item(Some("x"), None, Some("9")),
        ]);

        assert!(records.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let records = extract_records(vec![
            item(Some("C"), Some("3"), None),
            item(Some("A"), Some("1"), None),
            item(None, Some("0"), None),
            item(Some("B"), Some("2"), None),
        ]);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_input_yields_empty_catalog() {
        assert!(extract_records(Vec::new()).is_empty());
    }

    #[test]
    fn test_empty_string_fields_are_kept() {
        // Present-but-empty text degrades the record, it does not skip it
        let records = extract_records(vec![item(Some(""), Some(""), Some(""))]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "");
    }
}
