//! Static rule tables.
//!
//! The fixed combinatorial data of the chart engine: hidden-stem profiles,
//! the sixty-entry nayin table, the seasonal strength matrix, and the
//! combination/conflict tables. These are data, not logic; the analyzers
//! consume them and the tables are unit-tested independently.

mod combinations;
mod conflicts;
mod hidden_stems;
mod nayin;
mod seasonal;

pub use combinations::{
    all_combinations, CombinationEntry, CombinationKind, SEASONAL_ASSEMBLIES, SIX_HARMONIES,
    TRINES,
};
pub use conflicts::{
    all_conflict_pairs, ConflictKind, ConflictPair, BREAKS, EXTINGUISHINGS, OPPOSITIONS,
    PIERCINGS, PUNISHMENT_GROUPS, PUNISHMENT_PAIRS,
};
pub use hidden_stems::{hidden_stem_profile, hidden_stems};
pub use nayin::{nayin, nayin_by_name, sexagenary_index, NayinEntry, NAYIN_TABLE};
pub use seasonal::{period_seasonal_bonus, seasonal_strength};
