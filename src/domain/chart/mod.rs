//! Chart construction and derived readings.
//!
//! Pure calculators over the raw sexagenary output of a calendar
//! provider: pillar assembly, ten gods, nayin, and the major-period
//! schedule, plus the assembled result type.

mod chart_result;
mod four_pillars;
mod major_periods;
mod nayin_info;
mod ten_gods;

pub use chart_result::{ChartMetadata, ChartOptions, ChartResult, ALGORITHM_VERSION};
pub use four_pillars::FourPillars;
pub use major_periods::{
    Direction, Favorability, MajorPeriod, MajorPeriodCalculation, MajorPeriodGenerator,
    DEFAULT_PERIOD_COUNT,
};
pub use nayin_info::{NayinCompatibility, NayinInfo, NayinResolver};
pub use ten_gods::{TenGodAnalysis, TenGodRelation, TenGodResolver, TenGodSummary};
