//! File-based config discovery for CLI use
//!
//! Finds, loads and saves build configuration documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};

/// Default build configuration file name
pub const CONFIG_FILE: &str = "packrig.config.json";

/// File-based configuration discovery
///
/// Library users should use `BuildConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use packrig_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. packrig.config.json
    /// 2. package.json (packrig field)
    pub fn find(&self) -> Option<PathBuf> {
        let json_path = self.root.join(CONFIG_FILE);
        if json_path.exists() {
            return Some(json_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("packrig").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<BuildConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_from(&path)
    }
}

/// Load a build configuration from a specific file
pub fn load_from(path: &Path) -> Result<BuildConfig> {
    debug!(path = %path.display(), "loading build config");
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: path.display().to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        let section = parsed
            .get("packrig")
            .filter(|v| !v.is_null())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "packrig".to_string(),
                hint: Some("Add a 'packrig' field to your package.json".to_string()),
            })?;
        return BuildConfig::from_value(section.clone());
    }

    BuildConfig::from_value(parsed)
}

/// Write a build configuration as JSON
pub fn save_to(config: &BuildConfig, path: &Path, pretty: bool) -> Result<()> {
    let value = config.to_value()?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(|e| ConfigError::InvalidValue {
        field: "config".to_string(),
        hint: Some(e.to_string()),
    })?;

    fs::write(path, rendered + "\n")?;
    debug!(path = %path.display(), "saved build config");
    Ok(())
}

/// Discover and load config from current directory (convenience function)
pub fn discover() -> Result<BuildConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_parses_json_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "devtool": "source-map", "plugins": [{ "kind": "archive" }] }"#,
        )
        .unwrap();

        let config = ConfigDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(config.plugins.len(), 1);
        assert!(config.plugins[0].kind.is_final_stage());
    }

    #[test]
    fn load_from_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
                "name": "test",
                "packrig": { "resolve": { "extensions": [".js"] } }
            }"#,
        )
        .unwrap();

        let config = ConfigDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(config.resolve.extensions, vec![".js".to_string()]);
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "test" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn save_then_load_keeps_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let config = BuildConfig::from_value(serde_json::json!({ "target": "web" })).unwrap();

        save_to(&config, &path, true).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
