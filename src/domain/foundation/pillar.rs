//! Pillar value object: one stem/branch pair with its derived attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Branch, Element, HiddenStem, Stem};

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    /// Weight applied to rootedness bonuses for a visible stem at this
    /// position. The day stem carries the most weight.
    pub fn transparency_weight(&self) -> f64 {
        match self {
            PillarPosition::Day => 1.5,
            PillarPosition::Hour => 1.2,
            PillarPosition::Year | PillarPosition::Month => 1.0,
        }
    }

    /// Weight applied to a visible stem's ten-god strength at this position.
    pub fn visible_stem_weight(&self) -> f64 {
        match self {
            PillarPosition::Year => 0.8,
            PillarPosition::Month => 1.0,
            PillarPosition::Day => 1.2,
            PillarPosition::Hour => 0.9,
        }
    }

    /// Weight applied to a hidden stem's ten-god strength at this position.
    /// The month branch commands the season, so it weighs most.
    pub fn hidden_stem_weight(&self) -> f64 {
        match self {
            PillarPosition::Year => 0.7,
            PillarPosition::Month => 1.2,
            PillarPosition::Day => 1.0,
            PillarPosition::Hour => 0.8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PillarPosition::Year => "year",
            PillarPosition::Month => "month",
            PillarPosition::Day => "day",
            PillarPosition::Hour => "hour",
        }
    }
}

impl fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the four pillars of a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub position: PillarPosition,
    pub stem: Stem,
    pub branch: Branch,
    /// Element of the visible stem.
    pub element: Element,
    /// Primary element of the branch.
    pub branch_element: Element,
    /// Owned copy of the branch's fixed hidden-stem profile.
    pub hidden_stems: Vec<HiddenStem>,
    /// Nayin sound label for this stem/branch pair.
    pub nayin: String,
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparency_weight_favors_day_then_hour() {
        assert!(
            PillarPosition::Day.transparency_weight()
                > PillarPosition::Hour.transparency_weight()
        );
        assert!(
            PillarPosition::Hour.transparency_weight()
                > PillarPosition::Year.transparency_weight()
        );
        assert_eq!(
            PillarPosition::Year.transparency_weight(),
            PillarPosition::Month.transparency_weight()
        );
    }

    #[test]
    fn hidden_stem_weight_favors_month() {
        let max = PillarPosition::ALL
            .iter()
            .map(|p| p.hidden_stem_weight())
            .fold(f64::MIN, f64::max);
        assert_eq!(PillarPosition::Month.hidden_stem_weight(), max);
    }

    #[test]
    fn position_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PillarPosition::Hour).unwrap(),
            "\"hour\""
        );
    }
}
