pub mod chart;

pub use chart::ChartRouter;
