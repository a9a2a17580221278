//! Generation/restriction scoring between visible stems.

use crate::domain::foundation::{Season, Stem};
use crate::domain::tables::seasonal_strength;

use super::ElementScores;

/// Points a visible stem feeds into the element it generates.
const GENERATION_AWARD: f64 = 2.0;

/// Points a visible stem drains from the element it restricts.
const RESTRICTION_PENALTY: f64 = 1.5;

/// Scores the generation and restriction flows among visible stems.
///
/// # Algorithm
///
/// Each visible stem pushes `2.0 x seasonal(source)` into the element it
/// generates and pulls `1.5 x seasonal(source)` from the element it
/// restricts. The season-adjusted strength of the acting element decides
/// how hard it pushes in both directions.
pub struct RelationshipAnalyzer;

impl RelationshipAnalyzer {
    pub fn score(stems: [Stem; 4], season: Season) -> ElementScores {
        let mut scores = ElementScores::default();
        for stem in stems {
            let source = stem.element();
            let force = seasonal_strength(season, source);
            scores.add(source.generates(), GENERATION_AWARD * force);
            scores.add(source.restricts(), -(RESTRICTION_PENALTY * force));
        }
        scores
    }
}
