//! Fixed calendar provider for tests and offline use.

use async_trait::async_trait;

use crate::domain::foundation::{BirthInput, ChartError, SexagenaryChart};
use crate::ports::CalendarProvider;

/// Calendar provider returning a preset sexagenary chart.
///
/// Real deployments wire an ephemeris-backed provider here; this one
/// serves tests and demos where the conversion result is known upfront.
#[derive(Debug, Clone)]
pub struct FixedCalendarProvider {
    chart: Option<SexagenaryChart>,
    failure: Option<String>,
}

impl FixedCalendarProvider {
    /// Provider that answers every request with `chart`.
    pub fn new(chart: SexagenaryChart) -> Self {
        Self {
            chart: Some(chart),
            failure: None,
        }
    }

    /// Provider that fails every request with a calendar error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            chart: None,
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl CalendarProvider for FixedCalendarProvider {
    async fn to_sexagenary(&self, _input: &BirthInput) -> Result<SexagenaryChart, ChartError> {
        if let Some(reason) = &self.failure {
            return Err(ChartError::calendar(reason.clone()));
        }
        self.chart
            .ok_or_else(|| ChartError::calendar("no chart configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Branch, Gender, Stem, StemBranch};

    fn input() -> BirthInput {
        BirthInput::new(1990, 6, 15, 12, Gender::Male)
    }

    fn chart() -> SexagenaryChart {
        SexagenaryChart::new(
            StemBranch::new(Stem::Geng, Branch::Wu),
            StemBranch::new(Stem::Ren, Branch::Wu),
            StemBranch::new(Stem::Bing, Branch::Yin),
            StemBranch::new(Stem::Jia, Branch::Wu),
        )
    }

    #[tokio::test]
    async fn returns_the_preset_chart() {
        let provider = FixedCalendarProvider::new(chart());
        let result = provider.to_sexagenary(&input()).await.unwrap();
        assert_eq!(result, chart());
    }

    #[tokio::test]
    async fn failing_mode_surfaces_a_calendar_error() {
        let provider = FixedCalendarProvider::failing("ephemeris offline");
        let err = provider.to_sexagenary(&input()).await.unwrap_err();
        assert!(matches!(err, ChartError::Calendar { .. }));
    }
}
