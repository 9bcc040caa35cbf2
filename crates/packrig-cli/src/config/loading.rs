use std::path::Path;

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use packrig_config::{Mode, Presets};
use tracing::debug;

use crate::config::{ENV_PREFIX, PRESET_FILE};
use crate::error::{CliError, Result};

/// Load presets from the preset file, the environment and a CLI mode flag.
///
/// An explicit `preset_path` must exist. Without one, `packrig.toml` in `cwd`
/// is used when present.
pub fn load_presets(
    preset_path: Option<&Path>,
    cwd: &Path,
    mode: Option<Mode>,
) -> Result<Presets> {
    let mut figment = Figment::new().merge(Serialized::defaults(Presets::default()));

    let preset_file = match preset_path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            Some(path.to_path_buf())
        }
        None => {
            let default_path = cwd.join(PRESET_FILE);
            default_path.exists().then_some(default_path)
        }
    };

    if let Some(path) = preset_file {
        debug!(path = %path.display(), "loading presets");
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    if let Some(mode) = mode {
        figment = figment.merge(Serialized::default("mode", mode));
    }

    Ok(figment.extract()?)
}
