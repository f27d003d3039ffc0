use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Behavioural hints a host may show to the user before running a tool.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_hint: Option<bool>,
}

/// A tool that can be invoked through `tools/call`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    pub description: String,
    /// JSON Schema describing the tool arguments
    pub input_schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Tool {
    pub fn new<N, D>(name: N, description: D, input_schema: Value) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            annotations: None,
            meta: None,
        }
    }

    pub fn read_only(mut self) -> Self {
        let annotations = self.annotations.get_or_insert_with(Default::default);
        annotations.read_only_hint = Some(true);
        self
    }

    /// Display name shown by hosts instead of the tool name.
    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        let annotations = self.annotations.get_or_insert_with(Default::default);
        annotations.title = Some(title.into());
        self
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}
