//! Application layer - Commands and Handlers.
//!
//! Orchestrates the domain calculators and coordinates between ports.

pub mod handlers;

pub use handlers::{GenerateChartCommand, GenerateChartHandler, GenerateChartResult};
