use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use zerog_input::KeyBindings;
use zerog_kernel::SimConfig;

use crate::validation;

/// Errors from loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Top-level config file.
///
/// A `bindings` section replaces the default key map as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZerogConfig {
    pub simulation: SimConfig,
    pub bindings: KeyBindings,
}

impl ZerogConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        validation::validate(&config)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Load and validate a YAML config file.
pub fn load_from_path(path: &Path) -> Result<ZerogConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let config = ZerogConfig::from_yaml(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path` if given, otherwise use the built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ZerogConfig, ConfigError> {
    match path {
        Some(p) => load_from_path(p),
        None => {
            info!("no config file given, using defaults");
            Ok(ZerogConfig::default())
        }
    }
}

/// The default config as commented YAML, suitable as a starting file.
pub fn default_config_yaml() -> &'static str {
    r#"# ZERO-G station configuration
# Only override what you want to change -- missing fields use defaults.

simulation:
  motion:
    speed: 0.15          # thrust per tick is speed * thrust_scale
    thrust_scale: 0.1
    friction: 0.96       # velocity kept each tick, 0.0-1.0 exclusive
  look:
    sensitivity: 0.005   # radians per pixel of drag
    # pitch_limit: 1.5707964
  station:
    z_min: -9.0
    z_max: 10.0
    half_width: 1.8      # corridor walls at +-half_width on X
    half_height: 1.8     # floor and ceiling at +-half_height on Y
    restitution: 0.5     # speed kept (reversed) on impact
    rooms:
      - { side: left, z_center: 0.0, z_half_extent: 2.0 }
      - { side: right, z_center: 4.0, z_half_extent: 2.0 }
  spawn: [0.0, 0.0, 8.0]

bindings:
  KeyW: forward
  ArrowUp: forward
  KeyS: backward
  ArrowDown: backward
  KeyA: left
  ArrowLeft: left
  KeyD: right
  ArrowRight: right
  Space: up
  ShiftLeft: down
"#
}
