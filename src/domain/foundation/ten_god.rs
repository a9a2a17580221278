//! Ten-god relationship labels and the classical resolution rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Stem;

/// One of the ten relationship labels between a stem and the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    DirectWealth,
    IndirectWealth,
    DirectOfficer,
    SevenKillings,
    DirectResource,
    IndirectResource,
}

impl TenGod {
    /// All ten labels in canonical order.
    pub const ALL: [TenGod; 10] = [
        TenGod::Friend,
        TenGod::RobWealth,
        TenGod::EatingGod,
        TenGod::HurtingOfficer,
        TenGod::DirectWealth,
        TenGod::IndirectWealth,
        TenGod::DirectOfficer,
        TenGod::SevenKillings,
        TenGod::DirectResource,
        TenGod::IndirectResource,
    ];

    /// Resolves the ten-god label of `target` relative to `day_master`.
    ///
    /// # Algorithm
    /// The label follows from the element relation between the two stems
    /// combined with polarity agreement:
    /// - same element: same polarity -> Friend, different -> RobWealth
    /// - day master generates target: same -> EatingGod, different -> HurtingOfficer
    /// - day master restricts target: same -> IndirectWealth, different -> DirectWealth
    /// - target restricts day master: same -> SevenKillings, different -> DirectOfficer
    /// - target generates day master: same -> IndirectResource, different -> DirectResource
    pub fn relation(day_master: Stem, target: Stem) -> TenGod {
        let dm_element = day_master.element();
        let target_element = target.element();
        let same_polarity = day_master.polarity() == target.polarity();

        if dm_element == target_element {
            if same_polarity {
                TenGod::Friend
            } else {
                TenGod::RobWealth
            }
        } else if dm_element.generates() == target_element {
            if same_polarity {
                TenGod::EatingGod
            } else {
                TenGod::HurtingOfficer
            }
        } else if dm_element.restricts() == target_element {
            if same_polarity {
                TenGod::IndirectWealth
            } else {
                TenGod::DirectWealth
            }
        } else if target_element.restricts() == dm_element {
            if same_polarity {
                TenGod::SevenKillings
            } else {
                TenGod::DirectOfficer
            }
        } else {
            // Remaining case: target generates the day master.
            if same_polarity {
                TenGod::IndirectResource
            } else {
                TenGod::DirectResource
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TenGod::Friend => "friend",
            TenGod::RobWealth => "rob_wealth",
            TenGod::EatingGod => "eating_god",
            TenGod::HurtingOfficer => "hurting_officer",
            TenGod::DirectWealth => "direct_wealth",
            TenGod::IndirectWealth => "indirect_wealth",
            TenGod::DirectOfficer => "direct_officer",
            TenGod::SevenKillings => "seven_killings",
            TenGod::DirectResource => "direct_resource",
            TenGod::IndirectResource => "indirect_resource",
        }
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_stem_is_friend() {
        for stem in Stem::ALL {
            assert_eq!(TenGod::relation(stem, stem), TenGod::Friend);
        }
    }

    #[test]
    fn jia_day_master_classic_row() {
        // Yang wood day master against each stem, per the classical table.
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Jia), TenGod::Friend);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Yi), TenGod::RobWealth);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Bing), TenGod::EatingGod);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Ding), TenGod::HurtingOfficer);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Wu), TenGod::IndirectWealth);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Ji), TenGod::DirectWealth);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Geng), TenGod::SevenKillings);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Xin), TenGod::DirectOfficer);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Ren), TenGod::IndirectResource);
        assert_eq!(TenGod::relation(Stem::Jia, Stem::Gui), TenGod::DirectResource);
    }

    #[test]
    fn yi_day_master_classic_row() {
        // Yin wood day master.
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Jia), TenGod::RobWealth);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Ding), TenGod::EatingGod);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Bing), TenGod::HurtingOfficer);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Ji), TenGod::IndirectWealth);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Wu), TenGod::DirectWealth);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Xin), TenGod::SevenKillings);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Geng), TenGod::DirectOfficer);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Gui), TenGod::IndirectResource);
        assert_eq!(TenGod::relation(Stem::Yi, Stem::Ren), TenGod::DirectResource);
    }

    #[test]
    fn geng_day_master_spot_checks() {
        // Yang metal day master.
        assert_eq!(TenGod::relation(Stem::Geng, Stem::Jia), TenGod::IndirectWealth);
        assert_eq!(TenGod::relation(Stem::Geng, Stem::Ding), TenGod::DirectOfficer);
        assert_eq!(TenGod::relation(Stem::Geng, Stem::Wu), TenGod::IndirectResource);
        assert_eq!(TenGod::relation(Stem::Geng, Stem::Ren), TenGod::EatingGod);
    }

    #[test]
    fn relation_is_total_over_all_hundred_pairs() {
        // Exercises every pair; the match arms above must cover them all.
        for day_master in Stem::ALL {
            let mut seen = std::collections::HashSet::new();
            for target in Stem::ALL {
                seen.insert(TenGod::relation(day_master, target));
            }
            assert_eq!(seen.len(), 10, "day master {} must see all ten labels", day_master);
        }
    }
}
