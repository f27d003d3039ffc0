use serde_json::{Map, Value, json};

use crate::error::{ChartError, Result};

/// Label of the placeholder dataset used when no datasets are supplied.
pub const PLACEHOLDER_DATASET_LABEL: &str = "Data";

const DATASETS_FIELD: &str = "datasets";
const RECORDS_FIELD: &str = "json_data";

/// Parse the `datasets` argument into raw dataset mappings.
///
/// A single object is wrapped into a one-element list. Missing or empty text
/// yields a single empty placeholder dataset.
pub fn parse_datasets(raw: Option<&str>) -> Result<Vec<Map<String, Value>>> {
    let raw = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(vec![placeholder_dataset()]),
    };

    let parsed: Value = serde_json::from_str(raw).map_err(|source| ChartError::InvalidJson {
        field: DATASETS_FIELD,
        source,
    })?;
    datasets_from_value(parsed)
}

/// Same as [`parse_datasets`] for input the host already decoded.
///
/// Only objects and arrays are accepted; `null` here is a shape error, the
/// placeholder is reserved for an absent argument.
pub fn datasets_from_value(value: Value) -> Result<Vec<Map<String, Value>>> {
    let items = match value {
        Value::Object(obj) => return Ok(vec![obj]),
        Value::Array(items) => items,
        _ => {
            return Err(ChartError::UnexpectedShape {
                field: DATASETS_FIELD,
            });
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(obj) => Ok(obj),
            _ => Err(ChartError::UnexpectedShape {
                field: DATASETS_FIELD,
            }),
        })
        .collect()
}

/// Parse the `json_data` argument: a non-empty JSON array of records.
pub fn parse_records(raw: &str) -> Result<Vec<Value>> {
    let parsed: Value = serde_json::from_str(raw).map_err(|source| ChartError::InvalidJson {
        field: RECORDS_FIELD,
        source,
    })?;
    records_from_value(parsed)
}

/// Same as [`parse_records`] for input the host already decoded.
pub fn records_from_value(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) if items.is_empty() => Err(ChartError::EmptyRecords),
        Value::Array(items) => Ok(items),
        _ => Err(ChartError::UnexpectedShape {
            field: RECORDS_FIELD,
        }),
    }
}

fn placeholder_dataset() -> Map<String, Value> {
    let mut ds = Map::new();
    ds.insert("label".into(), json!(PLACEHOLDER_DATASET_LABEL));
    ds.insert("values".into(), json!([]));
    ds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_datasets_placeholder() {
        for raw in [None, Some(""), Some("  ")] {
            let ds = parse_datasets(raw).unwrap();
            assert_eq!(ds.len(), 1);
            assert_eq!(ds[0]["label"], json!("Data"));
            assert_eq!(ds[0]["values"], json!([]));
        }
    }

    #[test]
    fn test_single_object_wrapped() {
        let ds = parse_datasets(Some(r#"{"label":"X","values":[1,2]}"#)).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0]["label"], json!("X"));
    }

    #[test]
    fn test_array_kept_in_order() {
        let ds = parse_datasets(Some(r#"[{"label":"A"},{"label":"B"}]"#)).unwrap();
        let labels: Vec<_> = ds.iter().map(|d| d["label"].clone()).collect();
        assert_eq!(labels, vec![json!("A"), json!("B")]);
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_datasets(Some("not json")).unwrap_err();
        assert!(matches!(err, ChartError::InvalidJson { field: "datasets", .. }));
        assert!(err.to_string().contains("valid JSON"));
    }

    #[test]
    fn test_bare_string_rejected() {
        let err = parse_datasets(Some(r#""just a string""#)).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn test_null_text_rejected() {
        let err = parse_datasets(Some("null")).unwrap_err();
        assert!(matches!(err, ChartError::UnexpectedShape { field: "datasets" }));
        assert!(matches!(
            datasets_from_value(Value::Null),
            Err(ChartError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_non_object_items_rejected() {
        assert!(matches!(
            parse_datasets(Some("[1,2,3]")),
            Err(ChartError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_records() {
        let records = parse_records(r#"[{"x":1},{"x":2}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_records_errors() {
        assert!(matches!(parse_records("[]"), Err(ChartError::EmptyRecords)));
        assert!(matches!(
            parse_records(r#"{"key":"val"}"#),
            Err(ChartError::UnexpectedShape { field: "json_data" })
        ));
        assert!(matches!(
            parse_records("not json"),
            Err(ChartError::InvalidJson { field: "json_data", .. })
        ));
    }
}
