//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `CalendarProvider` - Civil date to sexagenary chart conversion
//! - `CapabilityAssessor` - Optional downstream capability extension

mod calendar_provider;
mod capability_assessor;

pub use calendar_provider::CalendarProvider;
pub use capability_assessor::{
    CapabilityAssessor, CapabilityOutcome, CapabilityScores, CapabilitySnapshot,
};
