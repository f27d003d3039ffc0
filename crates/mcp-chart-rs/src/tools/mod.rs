pub mod chart;

pub use chart::{
    CsvChartArgs, JsonChartArgs, ShowChartArgs, build_chart, chart_from_csv, chart_from_json,
};
