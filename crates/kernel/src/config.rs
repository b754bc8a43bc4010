use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::StationBounds;
use crate::movement::MotionConfig;
use crate::orientation::LookConfig;

/// Everything a [`Simulation`](crate::Simulation) needs. Missing fields fall
/// back to the reference station layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub motion: MotionConfig,
    pub look: LookConfig,
    pub station: StationBounds,
    /// Starting camera position; orientation starts level facing -Z.
    pub spawn: Vec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            look: LookConfig::default(),
            station: StationBounds::default(),
            spawn: Vec3::new(0.0, 0.0, 8.0),
        }
    }
}
