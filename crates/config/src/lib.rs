//! Configuration: station layout, motion tuning and key bindings loaded from
//! YAML. Files only need to name what they override.

mod loader;
mod validation;

pub use loader::{ConfigError, ZerogConfig, default_config_yaml, load_from_path, load_or_default};
pub use validation::validate;
