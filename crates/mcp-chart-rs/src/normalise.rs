use serde_json::{Map, Value};

use crate::{
    model::Dataset,
    parse::{parse_labels, stringify},
    values::build_values,
};

/// An alternate key callers use for a canonical dataset field.
struct KeyAlias {
    alias: &'static str,
    canonical: &'static str,
    /// Drop the alias when the canonical key is already set.
    drop_shadowed: bool,
}

/// Applied in order. Both colour aliases compete for `color`; the first one
/// present wins and the other is dropped.
const KEY_ALIASES: [KeyAlias; 3] = [
    KeyAlias {
        alias: "data",
        canonical: "values",
        drop_shadowed: false,
    },
    KeyAlias {
        alias: "backgroundColor",
        canonical: "color",
        drop_shadowed: true,
    },
    KeyAlias {
        alias: "borderColor",
        canonical: "color",
        drop_shadowed: true,
    },
];

/// Rewrite alias keys onto canonical ones. An explicit canonical key always
/// wins over its alias. Other keys are left alone.
pub fn normalise_dataset(mut raw: Map<String, Value>) -> Map<String, Value> {
    for rule in &KEY_ALIASES {
        if !raw.contains_key(rule.alias) {
            continue;
        }
        if !raw.contains_key(rule.canonical) {
            if let Some(value) = raw.shift_remove(rule.alias) {
                raw.insert(rule.canonical.to_string(), value);
            }
        } else if rule.drop_shadowed {
            raw.shift_remove(rule.alias);
        }
    }
    raw
}

/// A dataset mapping after alias resolution, split into the fields the
/// pipeline understands and everything else.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDatasetRecord {
    pub label: Option<Value>,
    pub values: Option<Value>,
    pub color: Option<Value>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for RawDatasetRecord {
    fn from(raw: Map<String, Value>) -> Self {
        let mut extra = normalise_dataset(raw);
        Self {
            label: extra.shift_remove("label"),
            values: extra.shift_remove("values"),
            color: extra.shift_remove("color"),
            extra,
        }
    }
}

impl RawDatasetRecord {
    /// Build the canonical dataset at `position` against the shared labels.
    pub fn into_dataset(self, position: usize, labels: &[String]) -> Dataset {
        let label = match self.label {
            Some(Value::Null) | None => format!("Series {}", position + 1),
            Some(value) => stringify(&value),
        };

        let entries = match self.values {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(Value::String(text)) if text.trim().is_empty() => Vec::new(),
            Some(Value::String(text)) => parse_labels(&text).into_iter().map(Value::String).collect(),
            Some(other) => vec![other],
        };

        let color = match self.color {
            Some(Value::String(c)) if !c.trim().is_empty() => Some(c),
            None | Some(Value::Null) | Some(Value::String(_)) => None,
            Some(other) => {
                tracing::warn!(dataset = %label, color = %other, "Ignoring non-string colour");
                None
            }
        };

        Dataset {
            values: build_values(&entries, labels),
            label,
            color,
            extra: self.extra,
        }
    }
}
