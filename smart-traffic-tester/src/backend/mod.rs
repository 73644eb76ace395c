//! Contract probes against a running prediction backend
pub mod probe;

pub use probe::{HttpBackend, ProbeResult, run_probe};
