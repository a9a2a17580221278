//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, enums, and error types that form the
//! vocabulary of the chart engine: stems, branches, elements, seasons,
//! pillars, ten-god labels, and validated birth input.

mod birth_input;
mod branch;
mod element;
mod errors;
mod gender;
mod hidden_stem;
mod pillar;
mod season;
mod sexagenary;
mod stem;
mod ten_god;

pub use birth_input::{BirthInput, MAX_YEAR, MIN_YEAR};
pub use branch::Branch;
pub use element::Element;
pub use errors::{CalculationStage, ChartError, ErrorCode, ValidationError};
pub use gender::Gender;
pub use hidden_stem::{HiddenStem, RootTier};
pub use pillar::{Pillar, PillarPosition};
pub use season::Season;
pub use sexagenary::{SexagenaryChart, StemBranch};
pub use stem::{Polarity, Stem};
pub use ten_god::TenGod;
