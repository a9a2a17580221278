//! Calendar provider adapters.

mod fixed_provider;

pub use fixed_provider::FixedCalendarProvider;
