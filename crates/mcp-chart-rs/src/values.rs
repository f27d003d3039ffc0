use serde_json::Value;

use crate::{
    model::LabeledValue,
    parse::{parse_number, stringify},
};

/// Coerce a JSON value to a finite number.
///
/// Numbers and numeric strings convert; everything else, booleans included,
/// does not.
pub fn coerce_number(value: &Value) -> Option<f64> {
    // `true`/`false` are flags, not measurements: they fall through to 0.
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Whether an entry is already a `{"label": .., "value": ..}` object.
pub fn is_labeled_value(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("label") && obj.contains_key("value"))
}

/// Turn raw entries into labelled values.
///
/// Pre-labelled entries keep their own label, so when every entry is labelled
/// the label sequence is ignored entirely. Other entries take the label at the
/// same position (or `Item N`) and fall back to `0` when not numeric.
pub fn build_values(raw: &[Value], labels: &[String]) -> Vec<LabeledValue> {
    raw.iter()
        .enumerate()
        .map(|(idx, entry)| match entry.as_object() {
            Some(obj) if is_labeled_value(entry) => LabeledValue {
                label: obj.get("label").map(stringify).unwrap_or_default(),
                value: coerce_or_zero(obj.get("value").unwrap_or(&Value::Null)),
                extra: obj
                    .iter()
                    .filter(|(key, _)| *key != "label" && *key != "value")
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            },
            _ => LabeledValue::new(
                labels
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| format!("Item {}", idx + 1)),
                coerce_or_zero(entry),
            ),
        })
        .collect()
}

fn coerce_or_zero(value: &Value) -> f64 {
    coerce_number(value).unwrap_or_else(|| {
        tracing::warn!(value = %value, "Non-numeric chart value, using 0");
        0.0
    })
}
