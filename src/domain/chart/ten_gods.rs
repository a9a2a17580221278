//! Ten-god relationships between the day master and every other stem.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Element, PillarPosition, Stem, TenGod};

use super::FourPillars;

/// Base strength of a visible stem before position weighting.
const VISIBLE_BASE_STRENGTH: f64 = 80.0;

/// Bonus factor for a stem that protrudes (appears as a visible stem).
const PROTRUSION_BONUS: f64 = 1.2;

/// One ten-god relationship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenGodRelation {
    pub target: Stem,
    pub element: Element,
    pub position: PillarPosition,
    /// Whether the target is a hidden stem rather than a visible one.
    pub hidden: bool,
    pub god: TenGod,
    /// Weighted influence, rounded to a whole number.
    pub strength: u32,
    /// Visible stems are always transparent; a hidden stem is transparent
    /// when its pillar's visible stem matches it.
    pub transparent: bool,
}

/// Aggregated view over all relations of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenGodSummary {
    /// Occurrence count per god, in canonical god order.
    pub counts: Vec<(TenGod, u32)>,
    /// Most frequent god; earlier canonical order wins ties.
    pub strongest: TenGod,
    /// Least frequent god among those present.
    pub weakest: TenGod,
    /// Distinct gods seen on transparent stems, in first-seen order.
    pub visible: Vec<TenGod>,
    /// Distinct gods seen only through opaque hidden stems.
    pub hidden: Vec<TenGod>,
    /// Human-readable distribution note.
    pub distribution: String,
}

/// Full ten-god analysis for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenGodAnalysis {
    pub day_master: Stem,
    pub relations: Vec<TenGodRelation>,
    pub summary: TenGodSummary,
}

/// Derives ten-god relations from an assembled chart.
///
/// # Algorithm
///
/// Every visible stem and every hidden stem is related to the day master,
/// except the day master itself in the day pillar. Visible stems score
/// `80 x position weight x 1.2`; hidden stems score their root strength
/// (weight x 100) scaled by the weight again and the hidden position
/// weight. Both are rounded to whole numbers.
pub struct TenGodResolver;

impl TenGodResolver {
    pub fn resolve(pillars: &FourPillars) -> TenGodAnalysis {
        let day_master = pillars.day_master;
        let mut relations = Vec::new();

        for pillar in pillars.pillars() {
            let at_day = pillar.position == PillarPosition::Day;

            if !(at_day && pillar.stem == day_master) {
                relations.push(TenGodRelation {
                    target: pillar.stem,
                    element: pillar.stem.element(),
                    position: pillar.position,
                    hidden: false,
                    god: TenGod::relation(day_master, pillar.stem),
                    strength: visible_strength(pillar.position),
                    transparent: true,
                });
            }

            for hidden in &pillar.hidden_stems {
                if at_day && hidden.stem == day_master {
                    continue;
                }
                relations.push(TenGodRelation {
                    target: hidden.stem,
                    element: hidden.element,
                    position: pillar.position,
                    hidden: true,
                    god: TenGod::relation(day_master, hidden.stem),
                    strength: hidden_strength(hidden.weight, pillar.position),
                    transparent: pillar.stem == hidden.stem,
                });
            }
        }

        let summary = summarize(&relations);

        TenGodAnalysis {
            day_master,
            relations,
            summary,
        }
    }
}

fn visible_strength(position: PillarPosition) -> u32 {
    (VISIBLE_BASE_STRENGTH * position.visible_stem_weight() * PROTRUSION_BONUS).round() as u32
}

fn hidden_strength(weight: f64, position: PillarPosition) -> u32 {
    (weight * 100.0 * weight * position.hidden_stem_weight()).round() as u32
}

fn summarize(relations: &[TenGodRelation]) -> TenGodSummary {
    let mut counts: Vec<(TenGod, u32)> = TenGod::ALL.into_iter().map(|g| (g, 0)).collect();
    let mut visible = Vec::new();
    let mut hidden = Vec::new();

    for relation in relations {
        if let Some(entry) = counts.iter_mut().find(|(g, _)| *g == relation.god) {
            entry.1 += 1;
        }
        if relation.transparent {
            if !visible.contains(&relation.god) {
                visible.push(relation.god);
            }
        } else if !hidden.contains(&relation.god) {
            hidden.push(relation.god);
        }
    }

    let mut strongest = TenGod::Friend;
    let mut weakest = TenGod::Friend;
    let mut max_count = 0;
    let mut min_count = u32::MAX;
    for &(god, count) in &counts {
        if count > max_count {
            max_count = count;
            strongest = god;
        }
        if count > 0 && count < min_count {
            min_count = count;
            weakest = god;
        }
    }

    let distribution = describe_distribution(relations.len(), &counts, &visible, &hidden);

    TenGodSummary {
        counts,
        strongest,
        weakest,
        visible,
        hidden,
        distribution,
    }
}

fn describe_distribution(
    total: usize,
    counts: &[(TenGod, u32)],
    visible: &[TenGod],
    hidden: &[TenGod],
) -> String {
    let mut description = format!(
        "{} relations, {} kinds transparent, {} kinds hidden.",
        total,
        visible.len(),
        hidden.len()
    );

    let dominant: Vec<String> = counts
        .iter()
        .filter(|(_, count)| *count >= 2)
        .map(|(god, count)| format!("{} x{}", god, count))
        .collect();
    if !dominant.is_empty() {
        description.push_str(&format!(" Dominant: {}.", dominant.join(", ")));
    }

    description
}
