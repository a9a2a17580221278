//! Assembled chart output and generation options.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::BirthInput;
use crate::domain::strength::{Precision, StrengthAnalysis};

use super::{
    FourPillars, MajorPeriodCalculation, NayinInfo, TenGodAnalysis, DEFAULT_PERIOD_COUNT,
};

/// Version tag stamped into every result for cache keying and
/// reproducibility audits.
pub const ALGORITHM_VERSION: &str = "1.0.0";

/// What to compute and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub include_ten_gods: bool,
    pub include_nayin: bool,
    pub include_major_periods: bool,
    pub major_period_count: usize,
    pub validate_input: bool,
    pub precision: Precision,
    pub include_strength_breakdown: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            include_ten_gods: true,
            include_nayin: true,
            include_major_periods: true,
            major_period_count: DEFAULT_PERIOD_COUNT,
            validate_input: true,
            precision: Precision::Standard,
            include_strength_breakdown: false,
        }
    }
}

/// Provenance of one generated chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub chart_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Wall-clock generation time, floored at 1ms.
    pub elapsed_ms: u64,
    pub algorithm_version: String,
    pub options: ChartOptions,
}

impl ChartMetadata {
    pub fn new(elapsed_ms: u64, options: ChartOptions) -> Self {
        Self {
            chart_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            elapsed_ms: elapsed_ms.max(1),
            algorithm_version: ALGORITHM_VERSION.to_string(),
            options,
        }
    }
}

/// The complete natal chart reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub input: BirthInput,
    pub four_pillars: FourPillars,
    pub strength: StrengthAnalysis,
    pub ten_gods: Option<TenGodAnalysis>,
    pub nayin: Option<NayinInfo>,
    pub major_periods: Option<MajorPeriodCalculation>,
    pub metadata: ChartMetadata,
}
