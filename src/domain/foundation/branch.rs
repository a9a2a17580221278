//! Earthly branches: twelve cyclical labels, each with a fixed primary
//! element and season.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Element, Season};

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    /// All twelve branches in cycle order.
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Position in the twelve-branch cycle (0-11).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Branch at the given cycle position, wrapping modulo 12.
    pub fn from_index(index: usize) -> Branch {
        Self::ALL[index % 12]
    }

    /// Fixed primary element of this branch.
    pub fn element(&self) -> Element {
        match self {
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Hai | Branch::Zi => Element::Water,
            Branch::Chen | Branch::Wei | Branch::Xu | Branch::Chou => Element::Earth,
        }
    }

    /// Season this branch belongs to when it is the month branch.
    pub fn season(&self) -> Season {
        match self {
            Branch::Yin | Branch::Mao => Season::Spring,
            Branch::Si | Branch::Wu => Season::Summer,
            Branch::Shen | Branch::You => Season::Autumn,
            Branch::Hai | Branch::Zi => Season::Winter,
            Branch::Chen | Branch::Wei | Branch::Xu | Branch::Chou => Season::EarthMonth,
        }
    }

    /// Pinyin name.
    pub fn name(&self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
