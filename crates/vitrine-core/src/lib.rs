pub mod error;
pub mod extract;
pub mod record;
pub mod report;
pub mod selectors;

pub use error::{Error, Result};
pub use record::{Catalog, ProductRecord, STOCK_UNAVAILABLE};
pub use selectors::SelectorTable;
