use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    chart_type::resolve_chart_type,
    config::ChartConfig,
    error::Result,
    infer::{infer_records, infer_table},
    model::{AxisConfig, ChartContent, Dataset, LegendConfig},
    normalise::RawDatasetRecord,
    palette::assign_colours,
    parse::{
        datasets_from_value, labels::labels_from_array, parse_csv, parse_datasets, parse_labels,
        parse_records, records_from_value,
    },
};

/// Arguments of the explicit `show_chart` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowChartArgs {
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// `"A,B,C"`, `'["A","B","C"]'` or an actual array
    #[serde(default)]
    pub labels: Option<Value>,
    /// JSON text, or an already decoded array/object
    #[serde(default)]
    pub datasets: Option<Value>,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub y_axis_label: Option<String>,
    #[serde(default)]
    pub legend_position: Option<String>,
    #[serde(default)]
    pub stacked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvChartArgs {
    pub csv_data: String,
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonChartArgs {
    /// JSON text, or an already decoded array
    pub json_data: Value,
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Build a chart from explicit labels and dataset definitions.
pub fn build_chart(args: &ShowChartArgs, config: &ChartConfig) -> Result<ChartContent> {
    let labels = match &args.labels {
        Some(Value::String(text)) if !text.trim().is_empty() => parse_labels(text),
        Some(Value::Array(items)) => labels_from_array(items),
        _ => Vec::new(),
    };

    let raw_datasets = match &args.datasets {
        Some(Value::String(text)) => parse_datasets(Some(text.as_str()))?,
        Some(value) => datasets_from_value(value.clone())?,
        None => parse_datasets(None)?,
    };

    let mut datasets: Vec<Dataset> = raw_datasets
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| RawDatasetRecord::from(raw).into_dataset(idx, &labels))
        .collect();
    assign_colours(&mut datasets);

    let mut content = assemble(datasets, args.chart_type.as_deref(), args.title.as_deref(), config);
    content.x_axis = AxisConfig::from_parts(args.x_axis_label.as_deref(), args.stacked);
    content.y_axis = AxisConfig::from_parts(args.y_axis_label.as_deref(), args.stacked);
    content.legend = args
        .legend_position
        .as_deref()
        .map(str::trim)
        .filter(|pos| !pos.is_empty())
        .map(|pos| LegendConfig {
            position: pos.to_lowercase(),
        });

    Ok(content)
}

/// Build a chart from CSV text, inferring label and series columns.
pub fn chart_from_csv(args: &CsvChartArgs, config: &ChartConfig) -> Result<ChartContent> {
    let (header, rows) = parse_csv(&args.csv_data)?;
    let mut datasets = infer_table(&header, &rows)?;
    assign_colours(&mut datasets);
    Ok(assemble(datasets, args.chart_type.as_deref(), args.title.as_deref(), config))
}

/// Build a chart from a JSON array of records, inferring label and series fields.
pub fn chart_from_json(args: &JsonChartArgs, config: &ChartConfig) -> Result<ChartContent> {
    let records = match &args.json_data {
        Value::String(text) => parse_records(text)?,
        value => records_from_value(value.clone())?,
    };
    let mut datasets = infer_records(&records)?;
    assign_colours(&mut datasets);
    Ok(assemble(datasets, args.chart_type.as_deref(), args.title.as_deref(), config))
}

fn assemble(
    datasets: Vec<Dataset>,
    chart_type: Option<&str>,
    title: Option<&str>,
    config: &ChartConfig,
) -> ChartContent {
    ChartContent::new(
        config.title_or_default(title),
        resolve_chart_type(config.chart_type_or_default(chart_type)),
        datasets,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{error::ChartError, model::LabeledValue, palette::PALETTE};

    fn show(args: Value) -> Result<ChartContent> {
        let args: ShowChartArgs = serde_json::from_value(args).unwrap();
        build_chart(&args, &ChartConfig::default())
    }

    #[test]
    fn test_defaults() {
        let content = show(json!({})).unwrap();
        assert_eq!(content.title, "Chart");
        assert_eq!(content.chart_type, "bar");
        assert_eq!(content.data.len(), 1);
        assert_eq!(content.data[0].label, "Data");
        assert!(content.data[0].values.is_empty());
        assert_eq!(content.data[0].color.as_deref(), Some(PALETTE[0]));
        assert!(content.x_axis.is_none());
        assert!(content.legend.is_none());
    }

    #[test]
    fn test_labels_as_array_value() {
        let content = show(json!({
            "labels": ["A", "B"],
            "datasets": [{"label": "X", "values": [1, 2]}]
        }))
        .unwrap();
        assert_eq!(
            content.data[0].values,
            vec![LabeledValue::new("A", 1.0), LabeledValue::new("B", 2.0)]
        );
    }

    #[test]
    fn test_blank_labels_use_placeholders() {
        let content = show(json!({
            "labels": "",
            "datasets": "[{\"label\":\"X\",\"values\":[1]}]"
        }))
        .unwrap();
        assert_eq!(content.data[0].values[0].label, "Item 1");
    }

    #[test]
    fn test_axes_and_legend() {
        let content = show(json!({
            "labels": "A,B",
            "datasets": "[{\"label\":\"X\",\"values\":[1,2]}]",
            "y_axis_label": "$USD",
            "legend_position": " Bottom ",
            "stacked": true
        }))
        .unwrap();
        assert_eq!(content.x_axis, AxisConfig::from_parts(None, true));
        assert_eq!(content.y_axis.unwrap().label.as_deref(), Some("$USD"));
        assert_eq!(content.legend.unwrap().position, "bottom");
    }

    #[test]
    fn test_datasets_scalar_value_rejected() {
        let err = show(json!({"datasets": 42})).unwrap_err();
        assert!(matches!(err, ChartError::UnexpectedShape { field: "datasets" }));
    }

    #[test]
    fn test_datasets_null_text_rejected() {
        let err = show(json!({"datasets": "null"})).unwrap_err();
        assert!(matches!(err, ChartError::UnexpectedShape { field: "datasets" }));

        let content = show(json!({"datasets": null})).unwrap();
        assert_eq!(content.data[0].label, "Data");
    }

    #[test]
    fn test_csv_chart_type_alias() {
        let args = CsvChartArgs {
            csv_data: "X,Y\n1,10\n2,20".into(),
            chart_type: Some("Polar Area".into()),
            title: None,
        };
        let content = chart_from_csv(&args, &ChartConfig::default()).unwrap();
        assert_eq!(content.chart_type, "radar");
        assert_eq!(content.title, "Chart");
    }

    #[test]
    fn test_json_data_as_array_value() {
        let args = JsonChartArgs {
            json_data: json!([{"x": 1}, {"x": 2}]),
            chart_type: None,
            title: Some("Xs".into()),
        };
        let content = chart_from_json(&args, &ChartConfig::default()).unwrap();
        assert_eq!(content.title, "Xs");
        assert_eq!(content.data[0].values.len(), 2);
    }

    #[test]
    fn test_config_defaults_apply() {
        let config = ChartConfig {
            default_title: "Report".into(),
            default_chart_type: "line".into(),
            ..Default::default()
        };
        let args = CsvChartArgs {
            csv_data: "X,Y\n1,10".into(),
            chart_type: None,
            title: None,
        };
        let content = chart_from_csv(&args, &config).unwrap();
        assert_eq!(content.title, "Report");
        assert_eq!(content.chart_type, "line");
    }
}
