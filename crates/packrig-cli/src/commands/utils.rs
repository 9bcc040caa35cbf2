//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use packrig_config::{load_from, BuildConfig, ConfigDiscovery};

use crate::error::{Result, ResultExt};
use crate::ui;

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Load the build configuration named on the command line, or discover one.
///
/// Without an explicit path and without a discoverable file, an empty
/// configuration is returned when `allow_empty` is set.
pub fn load_build_config(
    explicit: Option<&Path>,
    cwd: &Path,
    allow_empty: bool,
) -> Result<Option<BuildConfig>> {
    if let Some(path) = explicit {
        let path = resolve_path(path, cwd);
        return Ok(Some(load_from(&path).with_path(&path)?));
    }

    match ConfigDiscovery::new(cwd).find() {
        Some(path) => Ok(Some(load_from(&path).with_path(&path)?)),
        None if allow_empty => {
            ui::warning("No packrig.config.json found, starting from an empty configuration");
            Ok(Some(BuildConfig::default()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_path_keeps_absolute() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(Path::new("/etc/a.json"), cwd), PathBuf::from("/etc/a.json"));
        assert_eq!(resolve_path(Path::new("a.json"), cwd), PathBuf::from("/work/a.json"));
    }

    #[test]
    fn discovers_config_in_cwd() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("packrig.config.json"), r#"{ "devtool": "eval" }"#).unwrap();

        let config = load_build_config(None, dir.path(), false).unwrap().unwrap();
        assert!(config.devtool.is_some());
    }

    #[test]
    fn missing_discovery_respects_allow_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_build_config(None, dir.path(), false).unwrap().is_none());
        assert!(load_build_config(None, dir.path(), true).unwrap().is_some());
    }
}
