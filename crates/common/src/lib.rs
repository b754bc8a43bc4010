//! Shared types: intents, camera pose, pointer events.
//!
//! # Invariants
//! - A `CameraPose` never carries roll; orientation is yaw then pitch (`YXZ`).
//! - Pitch stays within `[-π/2, π/2]`.

mod pointer;
mod types;

pub use pointer::{MouseButton, PointerEvent, PointerPhase, PointerSource};
pub use types::{
    CameraPose, ControllerState, Intent, PlayerState, finite_or_zero, finite_vec_or_zero,
};

pub fn crate_info() -> &'static str {
    "zerog-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
