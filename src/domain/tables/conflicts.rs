//! Branch conflict tables: oppositions, punishments, breaks, piercings,
//! and extinguishings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Branch;

/// Kind of branch conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Direct opposition (chong).
    Opposition,
    /// Punishment (xing); fires as a pair or a partial/complete group.
    Punishment,
    /// Minor break (po).
    Break,
    /// Piercing harm (chuan).
    Piercing,
    /// Extinguishing (jue).
    Extinguishing,
}

impl ConflictKind {
    /// Base severity subtracted per affected element.
    pub fn severity(&self) -> f64 {
        match self {
            ConflictKind::Opposition => 3.0,
            ConflictKind::Punishment => 2.0,
            ConflictKind::Break => 0.5,
            ConflictKind::Piercing => 1.5,
            ConflictKind::Extinguishing => 2.5,
        }
    }
}

/// A pairwise conflict entry.
#[derive(Debug, Clone, Copy)]
pub struct ConflictPair {
    pub kind: ConflictKind,
    pub branches: [Branch; 2],
}

const fn pair(kind: ConflictKind, a: Branch, b: Branch) -> ConflictPair {
    ConflictPair { kind, branches: [a, b] }
}

/// The six direct oppositions.
pub const OPPOSITIONS: [ConflictPair; 6] = [
    pair(ConflictKind::Opposition, Branch::Zi, Branch::Wu),
    pair(ConflictKind::Opposition, Branch::Chou, Branch::Wei),
    pair(ConflictKind::Opposition, Branch::Yin, Branch::Shen),
    pair(ConflictKind::Opposition, Branch::Mao, Branch::You),
    pair(ConflictKind::Opposition, Branch::Chen, Branch::Xu),
    pair(ConflictKind::Opposition, Branch::Si, Branch::Hai),
];

/// Three-branch punishment groups. A group fires when at least two of its
/// members are present; an incomplete group is damped to 70%.
pub const PUNISHMENT_GROUPS: [[Branch; 3]; 2] = [
    [Branch::Yin, Branch::Si, Branch::Shen],
    [Branch::Chou, Branch::Wei, Branch::Xu],
];

/// The pairwise punishment.
pub const PUNISHMENT_PAIRS: [ConflictPair; 1] =
    [pair(ConflictKind::Punishment, Branch::Zi, Branch::Mao)];

/// Minor breaks.
pub const BREAKS: [ConflictPair; 6] = [
    pair(ConflictKind::Break, Branch::Zi, Branch::You),
    pair(ConflictKind::Break, Branch::Mao, Branch::Wu),
    pair(ConflictKind::Break, Branch::Chen, Branch::Chou),
    pair(ConflictKind::Break, Branch::Wei, Branch::Xu),
    pair(ConflictKind::Break, Branch::Yin, Branch::Hai),
    pair(ConflictKind::Break, Branch::Si, Branch::Shen),
];

/// Piercing harms.
pub const PIERCINGS: [ConflictPair; 6] = [
    pair(ConflictKind::Piercing, Branch::Yin, Branch::Si),
    pair(ConflictKind::Piercing, Branch::Shen, Branch::Hai),
    pair(ConflictKind::Piercing, Branch::Chou, Branch::Wu),
    pair(ConflictKind::Piercing, Branch::Zi, Branch::Wei),
    pair(ConflictKind::Piercing, Branch::Mao, Branch::Chen),
    pair(ConflictKind::Piercing, Branch::You, Branch::Xu),
];

/// Extinguishings.
pub const EXTINGUISHINGS: [ConflictPair; 4] = [
    pair(ConflictKind::Extinguishing, Branch::Yin, Branch::You),
    pair(ConflictKind::Extinguishing, Branch::Mao, Branch::Shen),
    pair(ConflictKind::Extinguishing, Branch::Wu, Branch::Hai),
    pair(ConflictKind::Extinguishing, Branch::Zi, Branch::Si),
];

/// All pairwise conflict entries in detection order.
pub fn all_conflict_pairs() -> impl Iterator<Item = &'static ConflictPair> {
    OPPOSITIONS
        .iter()
        .chain(PUNISHMENT_PAIRS.iter())
        .chain(BREAKS.iter())
        .chain(PIERCINGS.iter())
        .chain(EXTINGUISHINGS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oppositions_are_six_apart() {
        for entry in &OPPOSITIONS {
            let [a, b] = entry.branches;
            assert_eq!((b.index() + 12 - a.index()) % 12, 6, "{}-{}", a, b);
        }
    }

    #[test]
    fn every_branch_appears_in_exactly_one_opposition() {
        for branch in Branch::ALL {
            let count = OPPOSITIONS
                .iter()
                .filter(|e| e.branches.contains(&branch))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn severities_rank_opposition_highest() {
        assert!(ConflictKind::Opposition.severity() > ConflictKind::Extinguishing.severity());
        assert!(ConflictKind::Extinguishing.severity() > ConflictKind::Punishment.severity());
        assert!(ConflictKind::Punishment.severity() > ConflictKind::Piercing.severity());
        assert!(ConflictKind::Piercing.severity() > ConflictKind::Break.severity());
    }

    #[test]
    fn punishment_groups_have_no_duplicates() {
        for group in &PUNISHMENT_GROUPS {
            assert_ne!(group[0], group[1]);
            assert_ne!(group[1], group[2]);
            assert_ne!(group[0], group[2]);
        }
    }

    #[test]
    fn pairwise_tables_never_pair_a_branch_with_itself() {
        for entry in all_conflict_pairs() {
            assert_ne!(entry.branches[0], entry.branches[1]);
        }
    }
}
