use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

/// One of the six movement intents a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Forward,
        Intent::Backward,
        Intent::Left,
        Intent::Right,
        Intent::Up,
        Intent::Down,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Intent::Forward => "forward",
            Intent::Backward => "backward",
            Intent::Left => "left",
            Intent::Right => "right",
            Intent::Up => "up",
            Intent::Down => "down",
        }
    }

    /// Parse a lowercase intent name as written in config files and CLI flags.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Six independent thrust intents. Any combination may be held at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ControllerState {
    pub fn get(&self, intent: Intent) -> bool {
        match intent {
            Intent::Forward => self.forward,
            Intent::Backward => self.backward,
            Intent::Left => self.left,
            Intent::Right => self.right,
            Intent::Up => self.up,
            Intent::Down => self.down,
        }
    }

    pub fn set(&mut self, intent: Intent, active: bool) {
        let slot = match intent {
            Intent::Forward => &mut self.forward,
            Intent::Backward => &mut self.backward,
            Intent::Left => &mut self.left,
            Intent::Right => &mut self.right,
            Intent::Up => &mut self.up,
            Intent::Down => &mut self.down,
        };
        *slot = active;
    }

    /// Builder-style helper, mostly for tests and scripted runs.
    pub fn with(mut self, intent: Intent) -> Self {
        self.set(intent, true);
        self
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    /// Intents currently held, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Intent> + '_ {
        Intent::ALL.into_iter().filter(|i| self.get(*i))
    }
}

/// Camera position plus an upright yaw/pitch orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut pose = Self {
            position,
            ..Self::default()
        };
        pose.set_orientation(yaw, pitch);
        pose
    }

    /// Build a pose from an arbitrary rotation, dropping any roll.
    pub fn from_rotation(position: Vec3, rotation: Quat) -> Self {
        let (yaw, pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
        Self::new(position, yaw, pitch)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw is wrapped into `(-π, π]`, pitch clamped to `[-π/2, π/2]`.
    /// Non-finite angles leave the corresponding component unchanged.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() {
            self.yaw = wrap_angle(yaw);
        }
        if pitch.is_finite() {
            self.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera-local -Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }
}

/// Serializable per-frame pose handed to renderers and trace output.
/// `rotation` is Euler `[pitch, yaw, roll]` in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl From<&CameraPose> for PlayerState {
    fn from(pose: &CameraPose) -> Self {
        Self {
            position: pose.position.to_array(),
            rotation: [pose.pitch(), pose.yaw(), 0.0],
        }
    }
}

/// Replace a non-finite scalar with zero.
pub fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// Replace a vector with zero if any component is non-finite.
pub fn finite_vec_or_zero(v: Vec3) -> Vec3 {
    if v.is_finite() { v } else { Vec3::ZERO }
}

fn wrap_angle(a: f32) -> f32 {
    if a > -PI && a <= PI {
        return a;
    }
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w <= -PI { PI } else { w }
}
