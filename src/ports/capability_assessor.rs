//! Outbound port for the optional capability assessment extension.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::chart::TenGodAnalysis;
use crate::domain::foundation::TenGod;
use crate::domain::strength::StrengthAnalysis;

/// Six business-oriented capability ratings, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapabilityScores {
    pub execution: f64,
    pub innovation: f64,
    pub management: f64,
    pub sales: f64,
    pub coordination: f64,
    pub stability: f64,
}

/// Assessment produced by an external capability module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    pub scores: CapabilityScores,
    /// Aggregated ten-god strengths the scores were derived from.
    pub ten_god_strengths: Vec<(TenGod, f64)>,
}

/// Result of one assessment attempt.
///
/// Absence of the extension is a normal state, never an error: the
/// chart pipeline succeeds regardless and simply omits the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CapabilityOutcome {
    Assessed(CapabilitySnapshot),
    Unavailable { reason: String },
}

/// Maps ten-god and element strength onto capability scores.
#[async_trait]
pub trait CapabilityAssessor: Send + Sync {
    async fn assess(
        &self,
        strength: &StrengthAnalysis,
        ten_gods: &TenGodAnalysis,
    ) -> CapabilityOutcome;
}
