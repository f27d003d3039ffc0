use serde_json::{Map, Value};

use crate::{
    error::{ChartError, Result},
    infer::positional_labels,
    model::{Dataset, LabeledValue},
    parse::stringify,
    values::coerce_number,
};

/// Field roles taken from the first record, in key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordShape {
    pub label_key: Option<String>,
    pub numeric_keys: Vec<String>,
}

impl RecordShape {
    /// Numeric fields become series; the first string field labels the rows.
    pub fn of(first: &Map<String, Value>) -> Self {
        let mut shape = Self::default();
        for (key, value) in first {
            match value {
                // Booleans are neither series nor labels.
                Value::Number(_) => shape.numeric_keys.push(key.clone()),
                Value::String(_) if shape.label_key.is_none() => {
                    shape.label_key = Some(key.clone());
                }
                _ => {}
            }
        }
        shape
    }
}

/// Build one dataset per numeric field of a list of JSON records.
///
/// Later records are assumed to share the first record's shape; a record
/// missing a field contributes `0` (or a `Row N` label).
pub fn infer_records(records: &[Value]) -> Result<Vec<Dataset>> {
    let first = match records.first() {
        None => return Err(ChartError::EmptyRecords),
        Some(Value::Object(obj)) => obj,
        Some(_) => {
            return Err(ChartError::UnexpectedShape {
                field: "json_data",
            });
        }
    };

    let shape = RecordShape::of(first);
    if shape.numeric_keys.is_empty() {
        return Err(ChartError::NoNumericField);
    }

    tracing::debug!(
        label_field = ?shape.label_key,
        series = shape.numeric_keys.len(),
        records = records.len(),
        "Inferred JSON record fields"
    );

    let labels = match &shape.label_key {
        Some(key) => records
            .iter()
            .enumerate()
            .map(|(idx, record)| match record.get(key) {
                Some(Value::Null) | None => format!("Row {}", idx + 1),
                Some(value) => stringify(value),
            })
            .collect(),
        None => positional_labels(records.len()),
    };

    let datasets = shape
        .numeric_keys
        .iter()
        .map(|key| {
            let values = records
                .iter()
                .zip(&labels)
                .map(|(record, label)| {
                    let value = match record.get(key) {
                        None | Some(Value::Null) => 0.0,
                        Some(raw) => coerce_number(raw).unwrap_or_else(|| {
                            tracing::warn!(field = %key, value = %raw, "Non-numeric field value, using 0");
                            0.0
                        }),
                    };
                    LabeledValue::new(label.clone(), value)
                })
                .collect();
            Dataset::new(key.clone(), values)
        })
        .collect();

    Ok(datasets)
}
