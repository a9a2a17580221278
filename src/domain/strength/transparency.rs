//! Rootedness scoring for visible stems.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Element, PillarPosition, RootTier, SexagenaryChart, Stem};
use crate::domain::tables::hidden_stem_profile;

use super::ElementScores;

/// One rooted visible stem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedRoot {
    pub stem: Stem,
    pub position: PillarPosition,
    pub tier: RootTier,
    pub bonus: f64,
}

/// Scores how firmly each visible stem is rooted in the branches.
///
/// # Algorithm
///
/// A visible stem is rooted when its element appears among the hidden
/// stems of any branch. Only the best root counts: primary roots award
/// 3 points, secondary 2, residual 1, scaled by the stem's position
/// weight. An unrooted stem awards nothing.
pub struct TransparencyAnalyzer;

impl TransparencyAnalyzer {
    pub fn score(chart: &SexagenaryChart) -> (ElementScores, Vec<DetectedRoot>) {
        let mut scores = ElementScores::default();
        let mut roots = Vec::new();

        let positions = [
            PillarPosition::Year,
            PillarPosition::Month,
            PillarPosition::Day,
            PillarPosition::Hour,
        ];

        for (stem, position) in chart.stems().into_iter().zip(positions) {
            let Some(tier) = best_root(stem.element(), chart) else {
                continue;
            };
            let bonus = tier_award(tier) * position.transparency_weight();
            scores.add(stem.element(), bonus);
            roots.push(DetectedRoot {
                stem,
                position,
                tier,
                bonus,
            });
        }

        (scores, roots)
    }
}

fn best_root(element: Element, chart: &SexagenaryChart) -> Option<RootTier> {
    let mut best: Option<f64> = None;
    for branch in chart.branches() {
        for &(stem, weight) in hidden_stem_profile(branch) {
            if stem.element() == element && best.map_or(true, |b| weight > b) {
                best = Some(weight);
            }
        }
    }
    best.map(RootTier::from_weight)
}

fn tier_award(tier: RootTier) -> f64 {
    match tier {
        RootTier::Primary => 3.0,
        RootTier::Secondary => 2.0,
        RootTier::Residual => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Branch, StemBranch};

    fn chart(stems: [Stem; 4], branches: [Branch; 4]) -> SexagenaryChart {
        SexagenaryChart::new(
            StemBranch::new(stems[0], branches[0]),
            StemBranch::new(stems[1], branches[1]),
            StemBranch::new(stems[2], branches[2]),
            StemBranch::new(stems[3], branches[3]),
        )
    }

    #[test]
    fn day_stem_primary_root_scores_highest() {
        // Day stem jia rooted in mao's primary wood.
        let chart = chart(
            [Stem::Geng, Stem::Geng, Stem::Jia, Stem::Geng],
            [Branch::Mao, Branch::Wu, Branch::Wu, Branch::Wu],
        );
        let (scores, roots) = TransparencyAnalyzer::score(&chart);
        let day_root = roots
            .iter()
            .find(|r| r.position == PillarPosition::Day)
            .unwrap();
        assert_eq!(day_root.tier, RootTier::Primary);
        assert!((day_root.bonus - 4.5).abs() < 1e-9);
        assert!((scores.get(Element::Wood) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn best_root_wins_over_weaker_ones() {
        // Water stem with a residual root in chen (gui 0.3) and a primary
        // one in zi (gui 1.0): primary wins.
        let chart = chart(
            [Stem::Ren, Stem::Bing, Stem::Bing, Stem::Bing],
            [Branch::Chen, Branch::Zi, Branch::Wu, Branch::Si],
        );
        let (_, roots) = TransparencyAnalyzer::score(&chart);
        let ren_root = roots
            .iter()
            .find(|r| r.stem == Stem::Ren)
            .unwrap();
        assert_eq!(ren_root.tier, RootTier::Primary);
        assert!((ren_root.bonus - 3.0).abs() < 1e-9);
    }

    #[test]
    fn unrooted_stem_awards_nothing() {
        // Metal stem over branches hiding no metal.
        let chart = chart(
            [Stem::Geng, Stem::Jia, Stem::Jia, Stem::Jia],
            [Branch::Mao, Branch::Mao, Branch::Zi, Branch::Hai],
        );
        let (scores, roots) = TransparencyAnalyzer::score(&chart);
        assert!(!roots.iter().any(|r| r.stem == Stem::Geng));
        assert_eq!(scores.get(Element::Metal), 0.0);
    }

    #[test]
    fn every_stem_is_checked_independently() {
        // All four stems wood over a mao branch: all rooted, position
        // weights 1.0 + 1.0 + 1.5 + 1.2.
        let chart = chart(
            [Stem::Jia, Stem::Yi, Stem::Jia, Stem::Yi],
            [Branch::Mao, Branch::Zi, Branch::Zi, Branch::Zi],
        );
        let (scores, roots) = TransparencyAnalyzer::score(&chart);
        assert_eq!(roots.len(), 4);
        assert!((scores.get(Element::Wood) - 3.0 * 4.7).abs() < 1e-9);
    }
}
