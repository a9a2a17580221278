//! GenerateChartHandler - Orchestrates one full chart generation.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::chart::{
    ChartMetadata, ChartOptions, ChartResult, FourPillars, MajorPeriodGenerator, NayinResolver,
    TenGodResolver,
};
use crate::domain::foundation::{BirthInput, ChartError};
use crate::domain::strength::StrengthAnalyzer;
use crate::ports::{CalendarProvider, CapabilityAssessor, CapabilityOutcome, CapabilitySnapshot};

/// Command to generate one natal chart.
#[derive(Debug, Clone)]
pub struct GenerateChartCommand {
    pub input: BirthInput,
    pub options: ChartOptions,
}

impl GenerateChartCommand {
    pub fn new(input: BirthInput) -> Self {
        Self {
            input,
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(input: BirthInput, options: ChartOptions) -> Self {
        Self { input, options }
    }
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateChartResult {
    pub chart: ChartResult,
    /// Present only when an assessor is configured and reachable.
    pub capability: Option<CapabilitySnapshot>,
}

/// Handler generating chart readings through the calendar port.
pub struct GenerateChartHandler {
    calendar: Arc<dyn CalendarProvider>,
    capability: Option<Arc<dyn CapabilityAssessor>>,
}

impl GenerateChartHandler {
    pub fn new(calendar: Arc<dyn CalendarProvider>) -> Self {
        Self {
            calendar,
            capability: None,
        }
    }

    /// Attaches the optional capability extension.
    pub fn with_capability(mut self, assessor: Arc<dyn CapabilityAssessor>) -> Self {
        self.capability = Some(assessor);
        self
    }

    #[tracing::instrument(skip_all, fields(year = cmd.input.year, month = cmd.input.month))]
    pub async fn handle(&self, cmd: GenerateChartCommand) -> Result<GenerateChartResult, ChartError> {
        let started = Instant::now();
        let options = cmd.options;

        // 1. Reject bad input before any stage runs.
        if options.validate_input {
            cmd.input.validate()?;
        }

        // 2. Calendar conversion through the port.
        let raw = self.calendar.to_sexagenary(&cmd.input).await?;

        // 3. Pillar assembly and the strength core.
        let four_pillars = FourPillars::from_sexagenary(&raw)?;
        let strength = StrengthAnalyzer::analyze(
            &raw,
            options.precision,
            options.include_strength_breakdown,
        );

        // 4. Optional readings.
        let ten_gods = options
            .include_ten_gods
            .then(|| TenGodResolver::resolve(&four_pillars));
        let nayin = options
            .include_nayin
            .then(|| NayinResolver::resolve(&four_pillars));
        let major_periods = options.include_major_periods.then(|| {
            MajorPeriodGenerator::generate(
                &four_pillars,
                cmd.input.gender,
                options.major_period_count,
            )
        });

        // 5. Capability extension degrades gracefully: its failure never
        //    fails the chart.
        let capability = match (&self.capability, &ten_gods) {
            (Some(assessor), Some(ten_gods)) => {
                match assessor.assess(&strength, ten_gods).await {
                    CapabilityOutcome::Assessed(snapshot) => Some(snapshot),
                    CapabilityOutcome::Unavailable { reason } => {
                        warn!(reason = %reason, "capability assessment unavailable");
                        None
                    }
                }
            }
            _ => None,
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let metadata = ChartMetadata::new(elapsed_ms, options);
        debug!(chart_id = %metadata.chart_id, elapsed_ms, "chart generated");

        Ok(GenerateChartResult {
            chart: ChartResult {
                input: cmd.input,
                four_pillars,
                strength,
                ten_gods,
                nayin,
                major_periods,
                metadata,
            },
            capability,
        })
    }

    /// Generates independent charts concurrently; order follows the input.
    pub async fn handle_batch(
        &self,
        commands: Vec<GenerateChartCommand>,
    ) -> Vec<Result<GenerateChartResult, ChartError>> {
        join_all(commands.into_iter().map(|cmd| self.handle(cmd))).await
    }
}
