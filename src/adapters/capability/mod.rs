//! Capability assessor adapters.

mod stub_assessor;

pub use stub_assessor::StubCapabilityAssessor;
