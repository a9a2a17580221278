//! Five-element strength scoring.
//!
//! The computational core: six additive scoring stages over the raw
//! stem/branch sequence, followed by normalization, classification, and
//! summary rendering. Every stage is a pure function of its input and
//! the rule tables.

mod analyzer;
mod combination;
mod conflict;
mod relationship;
mod scores;
mod transparency;

pub use analyzer::{
    BalanceTier, DayMasterStrength, MachineSummary, Precision, StrengthAnalysis,
    StrengthAnalyzer, StrengthBreakdown,
};
pub use combination::{CombinationAnalyzer, DetectedCombination};
pub use conflict::{ConflictAnalyzer, DetectedConflict};
pub use relationship::RelationshipAnalyzer;
pub use scores::{ElementScores, ScoreBreakdown};
pub use transparency::{DetectedRoot, TransparencyAnalyzer};
