use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One point of a series: a category label and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
    /// Per-point render fields (for example a point colour) kept as given.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LabeledValue {
    pub fn new<S: Into<String>>(label: S, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            extra: Map::new(),
        }
    }
}

/// A named series ready for the chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<LabeledValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Render-only fields such as `fill` or `tension`, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dataset {
    pub fn new<S: Into<String>>(label: S, values: Vec<LabeledValue>) -> Self {
        Self {
            label: label.into(),
            values,
            color: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
}

impl AxisConfig {
    /// An axis is only emitted when it carries a label or stacking.
    pub fn from_parts(label: Option<&str>, stacked: bool) -> Option<Self> {
        if label.is_none() && !stacked {
            return None;
        }
        Some(Self {
            label: label.map(str::to_string),
            stacked: stacked.then_some(true),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub position: String,
}

/// The canonical chart handed to the rendering view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartContent {
    pub title: String,
    pub chart_type: String,
    pub data: Vec<Dataset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
}

impl ChartContent {
    pub fn new<T, C>(title: T, chart_type: C, data: Vec<Dataset>) -> Self
    where
        T: Into<String>,
        C: Into<String>,
    {
        Self {
            title: title.into(),
            chart_type: chart_type.into(),
            data,
            x_axis: None,
            y_axis: None,
            legend: None,
        }
    }

    pub fn point_count(&self) -> usize {
        self.data.iter().map(|ds| ds.values.len()).sum()
    }

    /// One-line description for hosts that only show text.
    pub fn summary(&self) -> String {
        format!(
            "{} ({} chart, {} dataset(s), {} point(s)).",
            self.title,
            self.chart_type,
            self.data.len(),
            self.point_count()
        )
    }
}
