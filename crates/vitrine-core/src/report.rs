use crate::record::ProductRecord;

/// Returned verbatim when no records were collected
pub const EMPTY_REPORT: &str = "No product information could be collected.";

const DIVIDER: &str = "-------------------";

/// Render records into the fixed text report consumed by downstream callers
///
/// The shape is a compatibility surface: one name line, one price line, one
/// stock line, then a divider, per record, in catalog order. Identical input
/// always yields identical output.
pub fn format_report(records: &[ProductRecord]) -> String {
    if records.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let mut report = String::new();
    for record in records {
        report.push_str(&format!("Name: {}\n", record.name));
        report.push_str(&format!("Price: {}\n", record.price));
        report.push_str(&format!("Stock: {}\n", record.stock));
        report.push_str(DIVIDER);
        report.push('\n');
    }

    report
}
