//! Heavenly stems: ten cyclical labels, each with a fixed element and polarity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Element;

/// Yin/yang polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub fn is_yang(&self) -> bool {
        matches!(self, Polarity::Yang)
    }
}

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    /// All ten stems in cycle order.
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Position in the ten-stem cycle (0-9).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stem at the given cycle position, wrapping modulo 10.
    pub fn from_index(index: usize) -> Stem {
        Self::ALL[index % 10]
    }

    /// Fixed element of this stem.
    pub fn element(&self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    /// Fixed polarity of this stem. Even cycle positions are yang.
    pub fn polarity(&self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Pinyin name.
    pub fn name(&self) -> &'static str {
        match self {
            Stem::Jia => "jia",
            Stem::Yi => "yi",
            Stem::Bing => "bing",
            Stem::Ding => "ding",
            Stem::Wu => "wu",
            Stem::Ji => "ji",
            Stem::Geng => "geng",
            Stem::Xin => "xin",
            Stem::Ren => "ren",
            Stem::Gui => "gui",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
