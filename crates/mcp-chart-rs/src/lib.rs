//! Normalises loosely formatted chart input into one canonical model.
//!
//! Labels, dataset definitions, CSV text and JSON records sent by tool callers
//! are parsed, aliased, coerced and coloured into a [`ChartContent`] that a
//! chart view can render directly.

pub mod chart_type;
pub mod config;
pub mod error;
pub mod infer;
pub mod model;
pub mod normalise;
pub mod palette;
pub mod parse;
pub mod service;
pub mod tools;
pub mod values;

pub use chart_type::resolve_chart_type;
pub use config::ChartConfig;
pub use error::ChartError;
pub use mcp_core_rs as core;
pub use mcp_server_rs as server;
pub use model::{AxisConfig, ChartContent, Dataset, LabeledValue, LegendConfig};
pub use service::ChartRouter;
