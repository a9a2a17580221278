//! Raw sexagenary output of a calendar conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Branch, Stem};

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}

/// The four stem/branch pairs produced by a calendar provider.
///
/// Month boundaries follow solar terms, not calendar months; honoring that
/// is the provider's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexagenaryChart {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

impl SexagenaryChart {
    pub fn new(year: StemBranch, month: StemBranch, day: StemBranch, hour: StemBranch) -> Self {
        Self { year, month, day, hour }
    }

    /// Pairs in chart order: year, month, day, hour.
    pub fn pairs(&self) -> [StemBranch; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Visible stems in chart order.
    pub fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    /// Branches in chart order.
    pub fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SexagenaryChart {
        SexagenaryChart::new(
            StemBranch::new(Stem::Geng, Branch::Wu),
            StemBranch::new(Stem::Xin, Branch::Si),
            StemBranch::new(Stem::Bing, Branch::Yin),
            StemBranch::new(Stem::Yi, Branch::Wei),
        )
    }

    #[test]
    fn pairs_preserve_chart_order() {
        let chart = sample();
        let pairs = chart.pairs();
        assert_eq!(pairs[0].stem, Stem::Geng);
        assert_eq!(pairs[2].branch, Branch::Yin);
        assert_eq!(pairs[3], chart.hour);
    }

    #[test]
    fn stems_and_branches_align_with_pairs() {
        let chart = sample();
        assert_eq!(chart.stems(), [Stem::Geng, Stem::Xin, Stem::Bing, Stem::Yi]);
        assert_eq!(
            chart.branches(),
            [Branch::Wu, Branch::Si, Branch::Yin, Branch::Wei]
        );
    }

    #[test]
    fn stem_branch_displays_joined_names() {
        assert_eq!(
            format!("{}", StemBranch::new(Stem::Jia, Branch::Zi)),
            "jia-zi"
        );
    }
}
