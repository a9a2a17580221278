//! The sixty-entry nayin (sound element) table.
//!
//! Consecutive sexagenary pairs share one nayin, so the table holds thirty
//! entries indexed by cycle index / 2. Each entry carries a fixed element
//! and four qualitative descriptors.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{Branch, Element, Stem};

/// One nayin table entry.
#[derive(Debug, Clone, Copy)]
pub struct NayinEntry {
    pub name: &'static str,
    pub element: Element,
    pub traits: [&'static str; 4],
}

/// Sexagenary cycle index (0-59) for a stem/branch pair.
///
/// Returns `None` for mismatched-parity pairs, which never occur in the
/// sixty-cycle.
pub fn sexagenary_index(stem: Stem, branch: Branch) -> Option<usize> {
    let s = stem.index();
    let b = branch.index();
    if s % 2 != b % 2 {
        return None;
    }
    // Unique n in 0..60 with n = s (mod 10) and n = b (mod 12).
    Some((6 * s + 55 * b) % 60)
}

/// Nayin entry for a stem/branch pair, or `None` for invalid parity.
pub fn nayin(stem: Stem, branch: Branch) -> Option<&'static NayinEntry> {
    sexagenary_index(stem, branch).map(|n| &NAYIN_TABLE[n / 2])
}

/// The thirty nayin entries in cycle order.
pub const NAYIN_TABLE: [NayinEntry; 30] = [
    NayinEntry {
        name: "Sea Gold",
        element: Element::Metal,
        traits: ["hidden depth", "reserved steadiness", "late blooming", "latent potential"],
    },
    NayinEntry {
        name: "Furnace Fire",
        element: Element::Fire,
        traits: ["ardent passion", "open candor", "strong creativity", "leadership gift"],
    },
    NayinEntry {
        name: "Great Forest Wood",
        element: Element::Wood,
        traits: ["deep roots", "flourishing growth", "broad tolerance", "abundant vitality"],
    },
    NayinEntry {
        name: "Roadside Earth",
        element: Element::Earth,
        traits: ["steady pragmatism", "quiet dedication", "bearing capacity", "generous virtue"],
    },
    NayinEntry {
        name: "Sword Edge Metal",
        element: Element::Metal,
        traits: ["sharp edge", "decisive resolve", "cutting force", "commanding power"],
    },
    NayinEntry {
        name: "Mountain Summit Fire",
        element: Element::Fire,
        traits: ["lofty brightness", "far-reaching light", "warming presence", "lasting influence"],
    },
    NayinEntry {
        name: "Ravine Water",
        element: Element::Water,
        traits: ["clear purity", "long lineage", "silent nourishment", "deep wisdom"],
    },
    NayinEntry {
        name: "Rampart Earth",
        element: Element::Earth,
        traits: ["solid stability", "protective strength", "mark of authority", "dependable safety"],
    },
    NayinEntry {
        name: "White Wax Metal",
        element: Element::Metal,
        traits: ["polished purity", "decorative grace", "fine delicacy", "artistic gift"],
    },
    NayinEntry {
        name: "Willow Wood",
        element: Element::Wood,
        traits: ["supple adaptability", "swaying resilience", "strong vitality", "easy adjustment"],
    },
    NayinEntry {
        name: "Wellspring Water",
        element: Element::Water,
        traits: ["living source", "life nourishment", "cool clarity", "endless renewal"],
    },
    NayinEntry {
        name: "Rooftop Earth",
        element: Element::Earth,
        traits: ["sheltering cover", "settled safety", "practical use", "guardian of home"],
    },
    NayinEntry {
        name: "Thunderbolt Fire",
        element: Element::Fire,
        traits: ["immense force", "striking impact", "sudden change", "deep impression"],
    },
    NayinEntry {
        name: "Pine and Cypress Wood",
        element: Element::Wood,
        traits: ["unbending persistence", "evergreen constancy", "emblem of longevity", "noble character"],
    },
    NayinEntry {
        name: "Long Flowing Water",
        element: Element::Water,
        traits: ["unbroken continuity", "wide nourishment", "enduring persistence", "far influence"],
    },
    NayinEntry {
        name: "Sand Gold",
        element: Element::Metal,
        traits: ["buried richness", "needs unearthing", "latent value", "boundless opportunity"],
    },
    NayinEntry {
        name: "Hillside Fire",
        element: Element::Fire,
        traits: ["gentle brightness", "broad warmth", "approachable ease", "warm reliability"],
    },
    NayinEntry {
        name: "Plain Wood",
        element: Element::Wood,
        traits: ["open growth", "reach to many", "easy tolerance", "thriving vigor"],
    },
    NayinEntry {
        name: "Wall Earth",
        element: Element::Earth,
        traits: ["decorative refinement", "cultured polish", "artistic temperament", "inner pursuit"],
    },
    NayinEntry {
        name: "Gold Foil Metal",
        element: Element::Metal,
        traits: ["splendid ornament", "bright surface", "artistic worth", "pursuit of beauty"],
    },
    NayinEntry {
        name: "Lamp Fire",
        element: Element::Fire,
        traits: ["guiding light", "devoted glow", "service to others", "quiet radiance"],
    },
    NayinEntry {
        name: "Sky River Water",
        element: Element::Water,
        traits: ["broad embrace", "nourishing all", "open mind", "benefit to many"],
    },
    NayinEntry {
        name: "Highway Earth",
        element: Element::Earth,
        traits: ["vital crossroads", "connecting bridge", "practical worth", "carrying function"],
    },
    NayinEntry {
        name: "Hairpin Metal",
        element: Element::Metal,
        traits: ["exquisite ornament", "close companionship", "precious finesse", "sentimental worth"],
    },
    NayinEntry {
        name: "Mulberry Wood",
        element: Element::Wood,
        traits: ["nurturing fiber", "patient cultivation", "quiet usefulness", "steady yield"],
    },
    NayinEntry {
        name: "Great Stream Water",
        element: Element::Water,
        traits: ["rushing momentum", "gathering flow", "widening course", "restless energy"],
    },
    NayinEntry {
        name: "Sand Earth",
        element: Element::Earth,
        traits: ["shifting ground", "tempered resilience", "quiet accumulation", "adaptable footing"],
    },
    NayinEntry {
        name: "Celestial Fire",
        element: Element::Fire,
        traits: ["radiant height", "sweeping brilliance", "proud spirit", "wide illumination"],
    },
    NayinEntry {
        name: "Pomegranate Wood",
        element: Element::Wood,
        traits: ["clustered fruitfulness", "vivid bloom", "tenacious roots", "abundant legacy"],
    },
    NayinEntry {
        name: "Ocean Water",
        element: Element::Water,
        traits: ["vast depth", "embracing breadth", "hidden currents", "boundless reach"],
    },
];

static NAYIN_BY_NAME: Lazy<HashMap<&'static str, &'static NayinEntry>> =
    Lazy::new(|| NAYIN_TABLE.iter().map(|e| (e.name, e)).collect());

/// Nayin entry by name, used by compatibility analysis.
pub fn nayin_by_name(name: &str) -> Option<&'static NayinEntry> {
    NAYIN_BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexagenary_index_starts_at_jia_zi() {
        assert_eq!(sexagenary_index(Stem::Jia, Branch::Zi), Some(0));
        assert_eq!(sexagenary_index(Stem::Yi, Branch::Chou), Some(1));
        assert_eq!(sexagenary_index(Stem::Gui, Branch::Hai), Some(59));
    }

    #[test]
    fn mismatched_parity_pairs_have_no_index() {
        assert_eq!(sexagenary_index(Stem::Jia, Branch::Chou), None);
        assert_eq!(sexagenary_index(Stem::Yi, Branch::Zi), None);
    }

    #[test]
    fn all_sixty_valid_pairs_resolve() {
        let mut count = 0;
        for stem in Stem::ALL {
            for branch in Branch::ALL {
                if let Some(entry) = nayin(stem, branch) {
                    assert!(!entry.name.is_empty());
                    count += 1;
                }
            }
        }
        assert_eq!(count, 60);
    }

    #[test]
    fn consecutive_cycle_pairs_share_a_nayin() {
        // jia-zi and yi-chou are both Sea Gold.
        let first = nayin(Stem::Jia, Branch::Zi).unwrap();
        let second = nayin(Stem::Yi, Branch::Chou).unwrap();
        assert_eq!(first.name, "Sea Gold");
        assert_eq!(second.name, "Sea Gold");
        assert_eq!(first.element, Element::Metal);
    }

    #[test]
    fn classic_entries_resolve_correctly() {
        assert_eq!(nayin(Stem::Bing, Branch::Yin).unwrap().name, "Furnace Fire");
        assert_eq!(nayin(Stem::Geng, Branch::Chen).unwrap().name, "White Wax Metal");
        assert_eq!(nayin(Stem::Ren, Branch::Xu).unwrap().name, "Ocean Water");
        assert_eq!(nayin(Stem::Wu, Branch::Wu).unwrap().name, "Celestial Fire");
    }

    #[test]
    fn element_distribution_is_six_per_element() {
        for element in Element::ALL {
            let count = NAYIN_TABLE.iter().filter(|e| e.element == element).count();
            assert_eq!(count, 6, "{} nayin entries for {}", count, element);
        }
    }

    #[test]
    fn every_entry_has_four_traits() {
        for entry in &NAYIN_TABLE {
            assert!(entry.traits.iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn nayin_by_name_finds_entries() {
        assert!(nayin_by_name("Sea Gold").is_some());
        assert!(nayin_by_name("No Such Sound").is_none());
    }
}
