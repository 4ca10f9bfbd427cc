//! Shared utilities.

mod text;

pub use text::{escape_csv, quote_csv, xml_escape};
