//! Branch conflict detection and penalty scoring.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Branch, Element, Season};
use crate::domain::tables::{
    all_conflict_pairs, hidden_stem_profile, seasonal_strength, ConflictKind, PUNISHMENT_GROUPS,
};

use super::ElementScores;

/// Share of the penalty a fully in-season element can shrug off.
const SEASONAL_RESISTANCE: f64 = 0.3;

/// Damping applied to an incomplete punishment group.
const PARTIAL_PUNISHMENT_FACTOR: f64 = 0.7;

/// One conflict found among the chart's branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedConflict {
    pub kind: ConflictKind,
    pub branches: Vec<Branch>,
    /// False only for a two-of-three punishment group.
    pub complete: bool,
    /// Severity after any group damping, before per-element resistance.
    pub severity: f64,
    pub affected: Vec<Element>,
}

/// Detects oppositions, punishments, breaks, piercings, and
/// extinguishings.
///
/// # Algorithm
///
/// A conflict penalizes every element hidden in its participating
/// branches. The penalty per element is the conflict severity damped by
/// up to 30% of the element's season-adjusted strength, so an element in
/// season partially resists the damage.
pub struct ConflictAnalyzer;

impl ConflictAnalyzer {
    pub fn analyze(
        branches: [Branch; 4],
        season: Season,
    ) -> (ElementScores, Vec<DetectedConflict>) {
        let mut scores = ElementScores::default();
        let mut detected = Vec::new();

        for entry in all_conflict_pairs() {
            if entry.branches.iter().all(|b| branches.contains(b)) {
                let conflict = build_conflict(
                    entry.kind,
                    entry.branches.to_vec(),
                    true,
                    entry.kind.severity(),
                );
                apply(&mut scores, &conflict, season);
                detected.push(conflict);
            }
        }

        for group in &PUNISHMENT_GROUPS {
            let present: Vec<Branch> = group
                .iter()
                .copied()
                .filter(|b| branches.contains(b))
                .collect();
            if present.len() < 2 {
                continue;
            }
            let complete = present.len() == group.len();
            let severity = if complete {
                ConflictKind::Punishment.severity()
            } else {
                ConflictKind::Punishment.severity() * PARTIAL_PUNISHMENT_FACTOR
            };
            let conflict = build_conflict(ConflictKind::Punishment, present, complete, severity);
            apply(&mut scores, &conflict, season);
            detected.push(conflict);
        }

        (scores, detected)
    }
}

fn build_conflict(
    kind: ConflictKind,
    branches: Vec<Branch>,
    complete: bool,
    severity: f64,
) -> DetectedConflict {
    let mut affected = Vec::new();
    for branch in &branches {
        for (stem, _) in hidden_stem_profile(*branch) {
            let element = stem.element();
            if !affected.contains(&element) {
                affected.push(element);
            }
        }
    }

    DetectedConflict {
        kind,
        branches,
        complete,
        severity,
        affected,
    }
}

fn apply(scores: &mut ElementScores, conflict: &DetectedConflict, season: Season) {
    for &element in &conflict.affected {
        let resistance = seasonal_strength(season, element) * SEASONAL_RESISTANCE;
        scores.add(element, -(conflict.severity * (1.0 - resistance)));
    }
}
