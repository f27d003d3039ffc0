use async_trait::async_trait;
use mcp_core_rs::{CallToolResult, Tool, protocol::capabilities::ServerCapabilities};
use mcp_error_rs::{Error, Result};
use mcp_server_rs::router::{CapabilitiesBuilder, Router};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::{
    config::ChartConfig,
    model::ChartContent,
    tools::chart::{build_chart, chart_from_csv, chart_from_json},
};

pub const SHOW_CHART: &str = "show_chart";
pub const CHART_FROM_CSV: &str = "chart_from_csv";
pub const CHART_FROM_JSON: &str = "chart_from_json";

#[derive(Clone, Default)]
pub struct ChartRouter {
    config: ChartConfig,
}

impl ChartRouter {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn tool(&self, name: &str, title: &str, description: &str, input_schema: Value) -> Tool {
        let tool = Tool::new(name, description, input_schema)
            .read_only()
            .with_title(title);
        match self.config.ui_meta() {
            Some(meta) => tool.with_meta(meta),
            None => tool,
        }
    }

    /// Run one tool against its arguments without wrapping the result.
    pub fn chart(&self, tool_name: &str, arguments: Value) -> Result<ChartContent> {
        let content = match tool_name {
            SHOW_CHART => build_chart(&parse_args(tool_name, arguments)?, &self.config)?,
            CHART_FROM_CSV => chart_from_csv(&parse_args(tool_name, arguments)?, &self.config)?,
            CHART_FROM_JSON => chart_from_json(&parse_args(tool_name, arguments)?, &self.config)?,
            _ => return Err(Error::ToolNotFound(tool_name.to_string())),
        };
        Ok(content)
    }
}

fn parse_args<T: DeserializeOwned>(tool_name: &str, arguments: Value) -> Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| Error::InvalidParameters(format!("Invalid {} arguments: {}", tool_name, e)))
}

#[async_trait]
impl Router for ChartRouter {
    fn name(&self) -> String {
        "chart".to_string()
    }

    fn instructions(&self) -> String {
        "This server turns loosely formatted data into charts. Use 'show_chart' with labels and \
         datasets, 'chart_from_csv' with CSV text, or 'chart_from_json' with a JSON array of \
         objects. Supported chart types: bar, line, area, pie, doughnut, radar and polar."
            .to_string()
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new().with_tools(false).build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        let chart_type = json!({
            "type": "string",
            "description": "bar, line, area, pie, doughnut, radar or polar",
            "default": self.config.default_chart_type,
        });
        let title = json!({ "type": "string" });

        vec![
            self.tool(
                SHOW_CHART,
                "Show Chart",
                "Show a chart from labels and one or more datasets.",
                json!({
                    "type": "object",
                    "properties": {
                        "chart_type": chart_type,
                        "title": title,
                        "labels": {
                            "type": ["string", "array"],
                            "description": "Comma-separated labels, a JSON array string or an array"
                        },
                        "datasets": {
                            "type": ["string", "array", "object"],
                            "description": "JSON array of {label, values, color?} objects, as text or JSON"
                        },
                        "x_axis_label": { "type": "string" },
                        "y_axis_label": { "type": "string" },
                        "legend_position": {
                            "type": "string",
                            "enum": ["top", "bottom", "left", "right"]
                        },
                        "stacked": { "type": "boolean", "default": false }
                    },
                    "required": []
                }),
            ),
            self.tool(
                CHART_FROM_CSV,
                "Chart from CSV",
                "Chart CSV text. The first text column becomes labels, numeric columns become \
                 datasets.",
                json!({
                    "type": "object",
                    "properties": {
                        "csv_data": { "type": "string" },
                        "chart_type": chart_type,
                        "title": title
                    },
                    "required": ["csv_data"]
                }),
            ),
            self.tool(
                CHART_FROM_JSON,
                "Chart from JSON",
                "Chart a JSON array of objects. The first string field becomes labels, numeric \
                 fields become datasets.",
                json!({
                    "type": "object",
                    "properties": {
                        "json_data": {
                            "type": ["string", "array"],
                            "description": "JSON array of objects, as text or JSON"
                        },
                        "chart_type": chart_type,
                        "title": title
                    },
                    "required": ["json_data"]
                }),
            ),
        ]
    }

    async fn call_tool(&self, tool_name: &str, arguments: Value) -> Result<CallToolResult> {
        let content = self.chart(tool_name, arguments)?;
        tracing::info!(
            tool = %tool_name,
            chart_type = %content.chart_type,
            datasets = content.data.len(),
            "Chart built"
        );

        let structured = serde_json::to_value(&content)?;
        Ok(CallToolResult::text(content.summary()).with_structured(structured))
    }
}
