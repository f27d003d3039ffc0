//! Chart-agnostic parsers for the text shapes tool callers send.

pub mod json;
pub mod labels;
pub mod table;

use serde_json::Value;

pub use json::{datasets_from_value, parse_datasets, parse_records, records_from_value};
pub use labels::parse_labels;
pub use table::parse_csv;

/// Parse a number the way a spreadsheet cell would be read.
///
/// Surrounding whitespace is ignored; `NaN` and infinities are rejected so a
/// chart value is always finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a JSON scalar as label text. Strings lose their quotes.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
