//! Rendering adapter: renderer-agnostic interface over the camera pose.
//!
//! # Invariants
//! - Renderers read the pose once per frame and never mutate it.
//! - Projection parameters live here, not in the simulation.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "zerog-render v0.1.0"
}
