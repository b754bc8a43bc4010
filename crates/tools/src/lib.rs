//! Developer tooling: read-only inspection of a running simulation.
//!
//! # Invariants
//! - Tools never mutate the simulation.

mod inspector;

pub use inspector::{ContactTally, SimInspector, SimSummary, TracePoint};

pub fn crate_info() -> &'static str {
    "zerog-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
