use glam::Vec3;
use serde::{Deserialize, Serialize};
use zerog_common::{CameraPose, ControllerState, finite_vec_or_zero};

/// Zero-g thrust and drag parameters. Units are world units per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub speed: f32,
    /// Per-tick thrust is `speed * thrust_scale`.
    pub thrust_scale: f32,
    /// Velocity multiplier applied every tick.
    pub friction: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 0.15,
            thrust_scale: 0.1,
            friction: 0.96,
        }
    }
}

impl MotionConfig {
    pub fn thrust(&self) -> f32 {
        self.speed * self.thrust_scale
    }

    /// Per-tick displacement reached under constant single-axis thrust.
    /// Stored velocity settles at `terminal_speed() * friction`.
    pub fn terminal_speed(&self) -> f32 {
        self.thrust() / (1.0 - self.friction)
    }
}

/// Inertial integrator for the player point-mass.
#[derive(Debug, Clone, Default)]
pub struct MovementSimulator {
    config: MotionConfig,
}

impl MovementSimulator {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// World-space thrust for the held intents. Opposing intents cancel,
    /// combined axes add without normalisation.
    pub fn thrust(&self, intents: ControllerState, pose: &CameraPose) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if intents.forward {
            dir += Vec3::NEG_Z;
        }
        if intents.backward {
            dir += Vec3::Z;
        }
        if intents.right {
            dir += Vec3::X;
        }
        if intents.left {
            dir += Vec3::NEG_X;
        }
        if intents.up {
            dir += Vec3::Y;
        }
        if intents.down {
            dir += Vec3::NEG_Y;
        }
        if dir == Vec3::ZERO {
            return Vec3::ZERO;
        }
        finite_vec_or_zero(pose.rotation() * dir * self.config.thrust())
    }

    /// Accumulate thrust, move, then apply friction.
    pub fn integrate(&self, pose: &mut CameraPose, velocity: &mut Vec3, intents: ControllerState) {
        *velocity = finite_vec_or_zero(*velocity + self.thrust(intents, pose));
        let next = pose.position + *velocity;
        if next.is_finite() {
            pose.position = next;
        }
        *velocity *= self.config.friction;
    }
}
