//! Preset loading with layered sources.
//!
//! Priority: CLI flags > environment (`PACKRIG_*`) > preset file > defaults.
//! Nested keys in the environment are separated by `__`, for example
//! `PACKRIG_STYLESHEETS__OPTIMIZE_IMAGES=false`.

mod loading;

pub use loading::load_presets;

/// Default preset file name, looked up in the working directory
pub const PRESET_FILE: &str = "packrig.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PACKRIG_";
