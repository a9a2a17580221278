//! Outbound port for calendar conversion.

use async_trait::async_trait;

use crate::domain::foundation::{BirthInput, ChartError, SexagenaryChart};

/// Converts a civil birth moment into the four stem/branch pairs.
///
/// Implementations own the hard calendrical work: solar-term month
/// boundaries, lunar-to-solar conversion, and timezone handling. The
/// engine only requires that the returned pairs be valid sexagenary
/// combinations.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn to_sexagenary(&self, input: &BirthInput) -> Result<SexagenaryChart, ChartError>;
}
