//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::Path;

use regex::Regex;
use tracing::warn;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::externals::ExternalItem;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use packrig_config::{add_stylesheets, BuildConfig, ConfigValidator, SchemaValidator};
///
/// let mut config = BuildConfig::default();
/// add_stylesheets(&mut config, &Default::default());
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        for rule in &config.module.rules {
            check_pattern(&rule.test)?;
            if let Some(exclude) = &rule.exclude {
                check_pattern(exclude)?;
            }

            if rule.uses.iter().any(|entry| entry.loader.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule '{}' has a loader without a name", rule.test),
                    hint: Some("Every entry in 'use' needs a 'loader'".to_string()),
                });
            }
        }

        if let Some(externals) = &config.externals {
            for item in externals.items() {
                let empty = match item {
                    ExternalItem::Map(map) => map.keys().any(|key| key.trim().is_empty()),
                    ExternalItem::Name(name) => name.trim().is_empty(),
                };
                if empty {
                    return Err(ConfigError::SchemaValidation {
                        message: "external module identifiers cannot be empty".to_string(),
                        hint: Some("Remove empty names from 'externals'".to_string()),
                    });
                }
            }
        }

        // Not fatal: the engine still runs, the archive just misses later output
        let first_final = config
            .plugins
            .iter()
            .position(|plugin| plugin.kind.is_final_stage());
        if let Some(index) = first_final {
            if config.plugins[index..]
                .iter()
                .any(|plugin| !plugin.kind.is_final_stage())
            {
                warn!(
                    "archive plugin at position {index} runs before other plugins; \
                     call normalize_plugin_order last"
                );
            }
        }

        Ok(())
    }
}

/// Rule tests are JavaScript regular expressions. Syntax the `regex` crate
/// parses but does not implement (lookaround, backreferences) is let through.
fn check_pattern(pattern: &str) -> Result<()> {
    match Regex::new(pattern) {
        Ok(_) => Ok(()),
        Err(e) if e.to_string().contains("not supported") => {
            warn!(%pattern, "rule test uses syntax that cannot be checked here");
            Ok(())
        }
        Err(e) => Err(ConfigError::InvalidRuleTest {
            pattern: pattern.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then makes sure every entry point exists on disk.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for (name, paths) in &config.entry {
            for path in paths.paths() {
                let resolved = self.root.join(config.resolve_path(path));
                if !resolved.exists() {
                    return Err(ConfigError::SchemaValidation {
                        message: format!("entry '{name}' not found: {}", resolved.display()),
                        hint: Some("Check the 'entry' paths and 'context'".to_string()),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::externals::Externals;
    use crate::rule::{Rule, UseEntry};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn schema_validator_accepts_empty_config() {
        assert!(validate_schema(&BuildConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_bad_rule_pattern() {
        let mut config = BuildConfig::default();
        config
            .module
            .rules
            .push(Rule::new(r"\.(js$").loader(UseEntry::new("babel-loader")));

        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidRuleTest { .. }
        ));
    }

    #[test]
    fn schema_validator_accepts_lookaround_tests() {
        let mut config = BuildConfig::default();
        config.module.rules.push(
            Rule::new(r"^(?!.*\.spec\.js$).*\.js$").loader(UseEntry::new("babel-loader")),
        );
        config
            .module
            .rules
            .push(Rule::new(r"(?<=vendor/).*\.css$").loader(UseEntry::new("css-loader")));

        assert!(validate_schema(&config).is_ok());

        config
            .module
            .rules
            .push(Rule::new(r"\.(coffee$").loader(UseEntry::new("babel-loader")));
        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::InvalidRuleTest { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_unnamed_loader() {
        let mut config = BuildConfig::default();
        config
            .module
            .rules
            .push(Rule::new(r"\.js$").loader(UseEntry::new(" ")));

        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_external() {
        let mut config = BuildConfig::default();
        config.externals = Some(serde_json::from_value::<Externals>(json!(["react", "  "])).unwrap());

        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn fs_validator_checks_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.js"), "").unwrap();

        let mut config = BuildConfig::from_value(json!({ "entry": { "main": "main.js" } })).unwrap();
        assert!(validate_fs(&config, dir.path()).is_ok());

        config = BuildConfig::from_value(json!({ "entry": { "other": "missing.js" } })).unwrap();
        assert!(validate_fs(&config, dir.path()).is_err());
    }
}
