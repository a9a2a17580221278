//! Fixed hidden-stem profile per branch.
//!
//! Each branch hides one to three stems. Weights are fixed at 1.0 (primary
//! qi), 0.5 (middle qi), or 0.3 (residual qi) and never mutated.

use crate::domain::foundation::{Branch, HiddenStem, Stem};

/// Raw (stem, weight) profile for a branch, primary qi first.
pub fn hidden_stem_profile(branch: Branch) -> &'static [(Stem, f64)] {
    match branch {
        Branch::Zi => &[(Stem::Gui, 1.0)],
        Branch::Chou => &[(Stem::Ji, 1.0), (Stem::Xin, 0.5), (Stem::Gui, 0.3)],
        Branch::Yin => &[(Stem::Jia, 1.0), (Stem::Bing, 0.5), (Stem::Wu, 0.3)],
        Branch::Mao => &[(Stem::Yi, 1.0)],
        Branch::Chen => &[(Stem::Wu, 1.0), (Stem::Gui, 0.5), (Stem::Yi, 0.3)],
        Branch::Si => &[(Stem::Bing, 1.0), (Stem::Wu, 0.5), (Stem::Geng, 0.3)],
        Branch::Wu => &[(Stem::Ding, 1.0), (Stem::Ji, 0.3)],
        Branch::Wei => &[(Stem::Ji, 1.0), (Stem::Yi, 0.5), (Stem::Ding, 0.3)],
        Branch::Shen => &[(Stem::Geng, 1.0), (Stem::Ren, 0.5), (Stem::Wu, 0.3)],
        Branch::You => &[(Stem::Xin, 1.0)],
        Branch::Xu => &[(Stem::Wu, 1.0), (Stem::Ding, 0.5), (Stem::Xin, 0.3)],
        Branch::Hai => &[(Stem::Ren, 1.0), (Stem::Jia, 0.3)],
    }
}

/// Owned hidden-stem list for a branch. Callers get a fresh copy, so the
/// fixed profile is never shared by reference across pillars.
pub fn hidden_stems(branch: Branch) -> Vec<HiddenStem> {
    hidden_stem_profile(branch)
        .iter()
        .map(|&(stem, weight)| HiddenStem::new(stem, weight))
        .collect()
}
