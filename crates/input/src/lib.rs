//! Input aggregation: keyboard, on-screen buttons and drag-to-look events
//! merged into one intent state.
//!
//! # Invariants
//! - One boolean per intent; last writer wins.
//! - Producers on other threads go through [`InputQueue`], drained on the
//!   loop thread between ticks.

pub mod aggregator;
pub mod bindings;
pub mod queue;

pub use aggregator::{ButtonEdge, InputAggregator};
pub use bindings::KeyBindings;
pub use queue::{InputEvent, InputQueue, InputSender};

pub fn crate_info() -> &'static str {
    "zerog-input v0.1.0"
}
