//! Branch combination detection and scoring.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Branch, Element, Season};
use crate::domain::tables::{all_combinations, seasonal_strength, CombinationKind};

use super::ElementScores;

/// One combination found among the chart's branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedCombination {
    pub kind: CombinationKind,
    pub element: Element,
    pub matched: Vec<Branch>,
    pub complete: bool,
    /// Season-adjusted points awarded to the resultant element.
    pub score: f64,
}

/// Detects seasonal assemblies, trines, and six harmonies.
///
/// # Algorithm
///
/// Branch presence is set membership over the four chart branches; a
/// duplicated branch counts once. Three-branch tables fire complete or
/// with two of three members at their reduced multiplier; six harmonies
/// only fire complete. Awards are scaled by the resultant element's
/// season-adjusted strength.
pub struct CombinationAnalyzer;

impl CombinationAnalyzer {
    pub fn analyze(
        branches: [Branch; 4],
        season: Season,
    ) -> (ElementScores, Vec<DetectedCombination>) {
        let mut scores = ElementScores::default();
        let mut detected = Vec::new();

        for entry in all_combinations() {
            let matched: Vec<Branch> = entry
                .branches
                .iter()
                .copied()
                .filter(|b| branches.contains(b))
                .collect();

            let base = match (matched.len(), entry.kind.partial_multiplier()) {
                (n, _) if n == entry.branches.len() => entry.kind.base_score(),
                (2, Some(multiplier)) => entry.kind.base_score() * multiplier,
                _ => continue,
            };

            let score = base * seasonal_strength(season, entry.element);
            scores.add(entry.element, score);
            detected.push(DetectedCombination {
                kind: entry.kind,
                element: entry.element,
                complete: matched.len() == entry.branches.len(),
                matched,
                score,
            });
        }

        (scores, detected)
    }
}
