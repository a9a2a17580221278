//! Branch combination tables: seasonal assemblies, trines, six harmonies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Branch, Element};

/// Kind of branch combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationKind {
    /// Three-branch seasonal assembly (sanhui).
    SeasonalAssembly,
    /// Three-branch trine (sanhe).
    Trine,
    /// Two-branch six-harmony (liuhe).
    SixHarmony,
}

impl CombinationKind {
    /// Base score awarded for a complete combination.
    pub fn base_score(&self) -> f64 {
        match self {
            CombinationKind::SeasonalAssembly => 4.0,
            CombinationKind::Trine => 3.0,
            CombinationKind::SixHarmony => 2.0,
        }
    }

    /// Multiplier applied when only two of three branches are present.
    /// Six harmonies never fire partially.
    pub fn partial_multiplier(&self) -> Option<f64> {
        match self {
            CombinationKind::SeasonalAssembly => Some(0.5),
            CombinationKind::Trine => Some(0.6),
            CombinationKind::SixHarmony => None,
        }
    }
}

/// One combination table entry.
#[derive(Debug, Clone, Copy)]
pub struct CombinationEntry {
    pub kind: CombinationKind,
    pub branches: &'static [Branch],
    pub element: Element,
}

/// Three-branch seasonal assemblies, one per cardinal season.
pub const SEASONAL_ASSEMBLIES: [CombinationEntry; 4] = [
    CombinationEntry {
        kind: CombinationKind::SeasonalAssembly,
        branches: &[Branch::Yin, Branch::Mao, Branch::Chen],
        element: Element::Wood,
    },
    CombinationEntry {
        kind: CombinationKind::SeasonalAssembly,
        branches: &[Branch::Si, Branch::Wu, Branch::Wei],
        element: Element::Fire,
    },
    CombinationEntry {
        kind: CombinationKind::SeasonalAssembly,
        branches: &[Branch::Shen, Branch::You, Branch::Xu],
        element: Element::Metal,
    },
    CombinationEntry {
        kind: CombinationKind::SeasonalAssembly,
        branches: &[Branch::Hai, Branch::Zi, Branch::Chou],
        element: Element::Water,
    },
];

/// Three-branch trines.
pub const TRINES: [CombinationEntry; 4] = [
    CombinationEntry {
        kind: CombinationKind::Trine,
        branches: &[Branch::Shen, Branch::Zi, Branch::Chen],
        element: Element::Water,
    },
    CombinationEntry {
        kind: CombinationKind::Trine,
        branches: &[Branch::Hai, Branch::Mao, Branch::Wei],
        element: Element::Wood,
    },
    CombinationEntry {
        kind: CombinationKind::Trine,
        branches: &[Branch::Yin, Branch::Wu, Branch::Xu],
        element: Element::Fire,
    },
    CombinationEntry {
        kind: CombinationKind::Trine,
        branches: &[Branch::Si, Branch::You, Branch::Chou],
        element: Element::Metal,
    },
];

/// Two-branch six harmonies.
pub const SIX_HARMONIES: [CombinationEntry; 6] = [
    CombinationEntry {
        kind: CombinationKind::SixHarmony,
        branches: &[Branch::Zi, Branch::Chou],
        element: Element::Earth,
    },
    CombinationEntry {
        kind: CombinationKind::SixHarmony,
        branches: &[Branch::Yin, Branch::Hai],
        element: Element::Wood,
    },
    CombinationEntry {
        kind: CombinationKind::SixHarmony,
        branches: &[Branch::Mao, Branch::Xu],
        element: Element::Fire,
    },
    CombinationEntry {
        kind: CombinationKind::SixHarmony,
        branches: &[Branch::Chen, Branch::You],
        element: Element::Metal,
    },
    CombinationEntry {
        kind: CombinationKind::SixHarmony,
        branches: &[Branch::Si, Branch::Shen],
        element: Element::Water,
    },
    CombinationEntry {
        kind: CombinationKind::SixHarmony,
        branches: &[Branch::Wu, Branch::Wei],
        element: Element::Fire,
    },
];

/// All combination entries in detection order.
pub fn all_combinations() -> impl Iterator<Item = &'static CombinationEntry> {
    SEASONAL_ASSEMBLIES
        .iter()
        .chain(TRINES.iter())
        .chain(SIX_HARMONIES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemblies_and_trines_have_three_branches() {
        for entry in SEASONAL_ASSEMBLIES.iter().chain(TRINES.iter()) {
            assert_eq!(entry.branches.len(), 3);
        }
    }

    #[test]
    fn six_harmonies_have_two_branches() {
        for entry in &SIX_HARMONIES {
            assert_eq!(entry.branches.len(), 2);
        }
    }

    #[test]
    fn assembly_branches_share_the_resultant_season_direction() {
        // Each assembly is the three consecutive branches of one season.
        for entry in &SEASONAL_ASSEMBLIES {
            let indices: Vec<usize> = entry.branches.iter().map(|b| b.index()).collect();
            let consecutive = indices
                .windows(2)
                .all(|w| (w[1] + 12 - w[0]) % 12 == 1);
            assert!(consecutive, "assembly {:?} is not consecutive", entry.branches);
        }
    }

    #[test]
    fn trine_branches_are_four_apart() {
        for entry in &TRINES {
            let indices: Vec<usize> = entry.branches.iter().map(|b| b.index()).collect();
            assert_eq!((indices[1] + 12 - indices[0]) % 12, 4);
            assert_eq!((indices[2] + 12 - indices[1]) % 12, 4);
        }
    }

    #[test]
    fn base_scores_rank_assembly_over_trine_over_harmony() {
        assert!(
            CombinationKind::SeasonalAssembly.base_score()
                > CombinationKind::Trine.base_score()
        );
        assert!(CombinationKind::Trine.base_score() > CombinationKind::SixHarmony.base_score());
    }

    #[test]
    fn six_harmony_never_fires_partially() {
        assert!(CombinationKind::SixHarmony.partial_multiplier().is_none());
        assert_eq!(
            CombinationKind::SeasonalAssembly.partial_multiplier(),
            Some(0.5)
        );
        assert_eq!(CombinationKind::Trine.partial_multiplier(), Some(0.6));
    }

    #[test]
    fn each_branch_appears_in_exactly_one_harmony() {
        for branch in Branch::ALL {
            let count = SIX_HARMONIES
                .iter()
                .filter(|e| e.branches.contains(&branch))
                .count();
            assert_eq!(count, 1, "{} appears in {} harmonies", branch, count);
        }
    }
}
