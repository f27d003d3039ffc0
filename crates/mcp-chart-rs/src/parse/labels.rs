use serde_json::Value;

use crate::parse::stringify;

/// Parse a labels argument sent either as `A,B,C` or as `["A","B","C"]`.
///
/// A string that looks like a JSON array but does not decode as one is split
/// on commas like any other string.
pub fn parse_labels(raw: &str) -> Vec<String> {
    let stripped = raw.trim();
    if stripped.starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(stripped) {
            return labels_from_array(&items);
        }
    }
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

pub(crate) fn labels_from_array(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| stringify(item).trim().to_string())
        .collect()
}
