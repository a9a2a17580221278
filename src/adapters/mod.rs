//! Adapters - Implementations of the outbound ports.

pub mod calendar;
pub mod capability;
