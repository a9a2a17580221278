//! Stub capability assessor.

use async_trait::async_trait;

use crate::domain::chart::TenGodAnalysis;
use crate::domain::foundation::TenGod;
use crate::domain::strength::StrengthAnalysis;
use crate::ports::{CapabilityAssessor, CapabilityOutcome, CapabilityScores, CapabilitySnapshot};

/// Deterministic in-process assessor.
///
/// Maps aggregated ten-god strengths onto the six capability axes with a
/// fixed pairing. Production deployments replace this with the full
/// assessment module; the `unavailable` mode exercises graceful
/// degradation paths.
#[derive(Debug, Clone, Default)]
pub struct StubCapabilityAssessor {
    failure: Option<String>,
}

impl StubCapabilityAssessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assessor that reports itself unavailable on every call.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl CapabilityAssessor for StubCapabilityAssessor {
    async fn assess(
        &self,
        _strength: &StrengthAnalysis,
        ten_gods: &TenGodAnalysis,
    ) -> CapabilityOutcome {
        if let Some(reason) = &self.failure {
            return CapabilityOutcome::Unavailable {
                reason: reason.clone(),
            };
        }

        let strengths = aggregate_strengths(ten_gods);
        let of = |god: TenGod| {
            strengths
                .iter()
                .find(|(g, _)| *g == god)
                .map(|(_, s)| *s)
                .unwrap_or(0.0)
        };
        let axis = |a: TenGod, b: TenGod| ((of(a) + of(b)) / 2.0).clamp(0.0, 100.0);

        let scores = CapabilityScores {
            execution: axis(TenGod::SevenKillings, TenGod::HurtingOfficer),
            innovation: axis(TenGod::EatingGod, TenGod::HurtingOfficer),
            management: axis(TenGod::DirectOfficer, TenGod::DirectResource),
            sales: axis(TenGod::DirectWealth, TenGod::IndirectWealth),
            coordination: axis(TenGod::Friend, TenGod::RobWealth),
            stability: axis(TenGod::DirectResource, TenGod::IndirectResource),
        };

        CapabilityOutcome::Assessed(CapabilitySnapshot {
            scores,
            ten_god_strengths: strengths,
        })
    }
}

/// Mean relation strength per god, in canonical god order.
fn aggregate_strengths(ten_gods: &TenGodAnalysis) -> Vec<(TenGod, f64)> {
    TenGod::ALL
        .into_iter()
        .map(|god| {
            let strengths: Vec<f64> = ten_gods
                .relations
                .iter()
                .filter(|r| r.god == god)
                .map(|r| r.strength as f64)
                .collect();
            let mean = if strengths.is_empty() {
                0.0
            } else {
                strengths.iter().sum::<f64>() / strengths.len() as f64
            };
            (god, mean)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{FourPillars, TenGodResolver};
    use crate::domain::foundation::{Branch, SexagenaryChart, Stem, StemBranch};
    use crate::domain::strength::{Precision, StrengthAnalyzer};

    fn chart() -> SexagenaryChart {
        SexagenaryChart::new(
            StemBranch::new(Stem::Geng, Branch::Wu),
            StemBranch::new(Stem::Ren, Branch::Wu),
            StemBranch::new(Stem::Bing, Branch::Yin),
            StemBranch::new(Stem::Jia, Branch::Wu),
        )
    }

    #[tokio::test]
    async fn assesses_scores_within_range() {
        let raw = chart();
        let pillars = FourPillars::from_sexagenary(&raw).unwrap();
        let ten_gods = TenGodResolver::resolve(&pillars);
        let strength = StrengthAnalyzer::analyze(&raw, Precision::Standard, false);

        let outcome = StubCapabilityAssessor::new()
            .assess(&strength, &ten_gods)
            .await;
        let CapabilityOutcome::Assessed(snapshot) = outcome else {
            panic!("expected an assessment");
        };
        for score in [
            snapshot.scores.execution,
            snapshot.scores.innovation,
            snapshot.scores.management,
            snapshot.scores.sales,
            snapshot.scores.coordination,
            snapshot.scores.stability,
        ] {
            assert!((0.0..=100.0).contains(&score));
        }
        assert_eq!(snapshot.ten_god_strengths.len(), 10);
    }

    #[tokio::test]
    async fn unavailable_mode_reports_the_reason() {
        let raw = chart();
        let pillars = FourPillars::from_sexagenary(&raw).unwrap();
        let ten_gods = TenGodResolver::resolve(&pillars);
        let strength = StrengthAnalyzer::analyze(&raw, Precision::Standard, false);

        let outcome = StubCapabilityAssessor::unavailable("module not deployed")
            .assess(&strength, &ten_gods)
            .await;
        assert!(matches!(
            outcome,
            CapabilityOutcome::Unavailable { reason } if reason == "module not deployed"
        ));
    }
}
