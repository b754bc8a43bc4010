//! Simulation kernel: orientation, movement, collision and the per-frame loop.
//!
//! # Invariants
//! - One simulation step per presented frame; no fixed-timestep decoupling.
//! - Input handlers and the step never interleave: the [`FrameLoop`] drains
//!   queued input before stepping, on the same thread.
//! - Velocity and position stay finite; pitch stays within `[-π/2, π/2]`.
//! - After a step the position satisfies every station boundary.

pub mod collision;
pub mod config;
pub mod frame;
pub mod movement;
pub mod orientation;
pub mod simulation;

pub use collision::{
    Axis, CollisionReport, CollisionResolver, Face, RoomZone, StationBounds, WallSide,
};
pub use config::SimConfig;
pub use frame::FrameLoop;
pub use movement::{MotionConfig, MovementSimulator};
pub use orientation::{DragState, LookConfig, OrientationController};
pub use simulation::{SimEvent, Simulation};
