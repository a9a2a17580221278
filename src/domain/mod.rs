//! Domain layer containing the chart engine's business logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `tables` - Static rule tables (hidden stems, nayin, seasonal matrix)
//! - `chart` - Pillar construction, ten gods, nayin, major periods
//! - `strength` - Five-element strength scoring pipeline
pub mod chart;
pub mod foundation;
pub mod strength;
pub mod tables;
