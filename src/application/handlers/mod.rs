//! Command handlers.

mod generate_chart;

pub use generate_chart::{GenerateChartCommand, GenerateChartHandler, GenerateChartResult};
