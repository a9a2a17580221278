//! End-to-end chart generation through the application handler.

use std::sync::Arc;

use bazi_core::adapters::calendar::FixedCalendarProvider;
use bazi_core::adapters::capability::StubCapabilityAssessor;
use bazi_core::application::{GenerateChartCommand, GenerateChartHandler};
use bazi_core::domain::chart::{ChartOptions, Direction, ALGORITHM_VERSION};
use bazi_core::domain::foundation::{
    Branch, ChartError, ErrorCode, Gender, SexagenaryChart, Stem, StemBranch,
};
use bazi_core::domain::strength::{DayMasterStrength, Precision};

fn summer_fire_chart() -> SexagenaryChart {
    SexagenaryChart::new(
        StemBranch::new(Stem::Geng, Branch::Wu),
        StemBranch::new(Stem::Ren, Branch::Wu),
        StemBranch::new(Stem::Bing, Branch::Yin),
        StemBranch::new(Stem::Jia, Branch::Wu),
    )
}

fn handler() -> GenerateChartHandler {
    GenerateChartHandler::new(Arc::new(FixedCalendarProvider::new(summer_fire_chart())))
}

fn birth() -> bazi_core::domain::foundation::BirthInput {
    bazi_core::domain::foundation::BirthInput::new(1990, 6, 15, 12, Gender::Male)
}

#[tokio::test]
async fn full_reading_covers_every_section() {
    let result = handler()
        .handle(GenerateChartCommand::new(birth()))
        .await
        .unwrap();
    let chart = &result.chart;

    assert_eq!(chart.four_pillars.day_master, Stem::Bing);
    assert_eq!(chart.four_pillars.day.nayin, "Furnace Fire");

    let ten_gods = chart.ten_gods.as_ref().unwrap();
    assert!(!ten_gods.relations.is_empty());

    let nayin = chart.nayin.as_ref().unwrap();
    assert_eq!(nayin.day, "Furnace Fire");

    let periods = chart.major_periods.as_ref().unwrap();
    assert_eq!(periods.periods.len(), 8);
    assert_eq!(periods.direction, Direction::Forward);

    assert_eq!(chart.strength.classification, DayMasterStrength::Strong);
    assert_eq!(chart.metadata.algorithm_version, ALGORITHM_VERSION);
    assert!(chart.metadata.elapsed_ms >= 1);
}

#[tokio::test]
async fn high_precision_with_breakdown_exposes_stage_components() {
    let options = ChartOptions {
        precision: Precision::High,
        include_strength_breakdown: true,
        ..ChartOptions::default()
    };
    let result = handler()
        .handle(GenerateChartCommand::with_options(birth(), options))
        .await
        .unwrap();

    let breakdown = result.chart.strength.breakdown.as_ref().unwrap();
    let totals = breakdown.components.totals();
    for (element, total) in totals.iter() {
        let stored = result.chart.strength.totals.get(element);
        assert!((stored - total).abs() < 1e-9);
    }
}

#[tokio::test]
async fn custom_period_count_is_honored() {
    let options = ChartOptions {
        major_period_count: 10,
        ..ChartOptions::default()
    };
    let result = handler()
        .handle(GenerateChartCommand::with_options(birth(), options))
        .await
        .unwrap();
    assert_eq!(result.chart.major_periods.unwrap().periods.len(), 10);
}

#[tokio::test]
async fn invalid_hour_fails_before_the_calendar_is_consulted() {
    let handler =
        GenerateChartHandler::new(Arc::new(FixedCalendarProvider::failing("unreachable")));
    let mut input = birth();
    input.hour = 25;

    let err = handler
        .handle(GenerateChartCommand::new(input))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::OutOfRange);
}

#[tokio::test]
async fn calendar_failure_surfaces_as_a_calendar_error() {
    let handler =
        GenerateChartHandler::new(Arc::new(FixedCalendarProvider::failing("ephemeris offline")));
    let err = handler
        .handle(GenerateChartCommand::new(birth()))
        .await
        .unwrap_err();
    assert!(matches!(err, ChartError::Calendar { .. }));
}

#[tokio::test]
async fn capability_degradation_never_fails_the_chart() {
    let degraded = handler()
        .with_capability(Arc::new(StubCapabilityAssessor::unavailable("offline")))
        .handle(GenerateChartCommand::new(birth()))
        .await
        .unwrap();
    assert!(degraded.capability.is_none());
    assert!(degraded.chart.ten_gods.is_some());

    let assessed = handler()
        .with_capability(Arc::new(StubCapabilityAssessor::new()))
        .handle(GenerateChartCommand::new(birth()))
        .await
        .unwrap();
    assert!(assessed.capability.is_some());
}

#[tokio::test]
async fn batch_results_match_sequential_generation() {
    let handler = handler();
    let commands: Vec<GenerateChartCommand> =
        (0..8).map(|_| GenerateChartCommand::new(birth())).collect();

    let sequential = handler
        .handle(GenerateChartCommand::new(birth()))
        .await
        .unwrap();
    let batch = handler.handle_batch(commands).await;

    assert_eq!(batch.len(), 8);
    for result in batch {
        let result = result.unwrap();
        assert_eq!(result.chart.strength, sequential.chart.strength);
        assert_eq!(result.chart.four_pillars, sequential.chart.four_pillars);
        assert_eq!(result.chart.major_periods, sequential.chart.major_periods);
    }
}
