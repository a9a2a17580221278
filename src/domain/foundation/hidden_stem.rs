//! Hidden stems: stems latently present within a branch, with a weight
//! indicating dominance.

use serde::{Deserialize, Serialize};

use super::{Element, Stem};

/// Dominance tier of a hidden stem, derived from its fixed weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootTier {
    /// Principal qi, weight 1.0.
    Primary,
    /// Middle qi, weight >= 0.5.
    Secondary,
    /// Residual qi, weight < 0.5.
    Residual,
}

impl RootTier {
    /// Tier for a hidden-stem weight.
    pub fn from_weight(weight: f64) -> RootTier {
        if weight >= 1.0 {
            RootTier::Primary
        } else if weight >= 0.5 {
            RootTier::Secondary
        } else {
            RootTier::Residual
        }
    }
}

/// A stem hidden within a branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub element: Element,
    pub weight: f64,
    pub tier: RootTier,
}

impl HiddenStem {
    /// Creates a hidden stem; element and tier follow from the stem and weight.
    pub fn new(stem: Stem, weight: f64) -> Self {
        Self {
            stem,
            element: stem.element(),
            weight,
            tier: RootTier::from_weight(weight),
        }
    }
}
