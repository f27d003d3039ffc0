use mcp_error_rs::Result;
use serde::Deserialize;
use serde_json::{Value, json};

pub const DEFAULT_TITLE: &str = "Chart";
pub const DEFAULT_CHART_TYPE: &str = "bar";

/// Tool-surface settings for [`ChartRouter`](crate::service::chart::ChartRouter).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Title used when the caller sends none
    pub default_title: String,
    /// Chart type used when the caller sends none
    pub default_chart_type: String,
    /// `ui://` resource the host loads to render charts
    pub resource_uri: Option<String>,
    /// Public URL of the chart view
    pub view_url: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            default_chart_type: DEFAULT_CHART_TYPE.to_string(),
            resource_uri: None,
            view_url: None,
        }
    }
}

impl ChartConfig {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Tool `_meta` pointing hosts at the chart view, if one is configured.
    pub fn ui_meta(&self) -> Option<Value> {
        if self.resource_uri.is_none() && self.view_url.is_none() {
            return None;
        }
        let mut ui = serde_json::Map::new();
        if let Some(uri) = &self.resource_uri {
            ui.insert("resourceUri".into(), json!(uri));
        }
        if let Some(url) = &self.view_url {
            ui.insert("viewUrl".into(), json!(url));
        }
        Some(json!({ "ui": ui }))
    }

    pub(crate) fn title_or_default(&self, title: Option<&str>) -> String {
        match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => self.default_title.clone(),
        }
    }

    pub(crate) fn chart_type_or_default<'a>(&'a self, chart_type: Option<&'a str>) -> &'a str {
        match chart_type {
            Some(ct) if !ct.trim().is_empty() => ct,
            _ => &self.default_chart_type,
        }
    }
}
