//! Engine configuration

use serde::Deserialize;

use crate::domain::chart::{ChartOptions, DEFAULT_PERIOD_COUNT};
use crate::domain::strength::Precision;

use super::error::ValidationError;

/// Chart engine defaults applied when a request carries no options.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Major periods generated per chart
    #[serde(default = "default_period_count")]
    pub major_period_count: usize,

    /// Percentage output precision
    #[serde(default)]
    pub precision: Precision,

    /// Include per-stage strength breakdowns by default
    #[serde(default)]
    pub include_strength_breakdown: bool,

    /// Upper bound on charts per batch request
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl EngineConfig {
    /// Default chart options derived from this configuration.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            major_period_count: self.major_period_count,
            precision: self.precision,
            include_strength_breakdown: self.include_strength_breakdown,
            ..ChartOptions::default()
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.major_period_count == 0 || self.major_period_count > 12 {
            return Err(ValidationError::InvalidPeriodCount);
        }
        if self.max_batch_size == 0 || self.max_batch_size > 1024 {
            return Err(ValidationError::InvalidBatchSize);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            major_period_count: default_period_count(),
            precision: Precision::default(),
            include_strength_breakdown: false,
            max_batch_size: default_max_batch_size(),
        }
    }
}

fn default_period_count() -> usize {
    DEFAULT_PERIOD_COUNT
}

fn default_max_batch_size() -> usize {
    64
}
