use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, trace};

use crate::config::{BuildConfig, EntryPaths};
use crate::error::{ConfigError, Result};
use crate::rule::{Enforce, Rule, UseEntry};

/// Extensions added to `resolve.extensions`
pub const COFFEE_EXTENSIONS: [&str; 2] = [".coffee", ".litcoffee"];

/// File extensions picked up when scanning for entry points
pub const ENTRY_EXTENSIONS: [&str; 3] = ["js", "coffee", "litcoffee"];

pub const COFFEE_TEST: &str = r"\.(lit)?coffee$";
pub const COFFEELINT_LOADER: &str = "coffeelint-loader";
pub const COFFEE_LOADER: &str = "coffee-loader";

/// Options for [`add_coffeescript`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoffeeScriptOptions {
    /// Directories (glob patterns allowed) scanned for entry points, relative
    /// to the configuration context
    pub entry: Vec<String>,

    /// Directories appended to `resolve.modules`
    pub modules: Vec<PathBuf>,

    /// Lint configuration file, relative to the configuration context
    pub lint_config: PathBuf,
}

impl Default for CoffeeScriptOptions {
    fn default() -> Self {
        Self {
            entry: vec!["**".to_string()],
            modules: vec![PathBuf::from("src")],
            lint_config: PathBuf::from("coffeelint.json"),
        }
    }
}

/// Wire CoffeeScript sources into the build.
///
/// Unlike the other presets this replaces `entry` outright with the result of
/// scanning `options.entry`, so both script flavors become entry points.
pub fn add_coffeescript(config: &mut BuildConfig, options: &CoffeeScriptOptions) -> Result<()> {
    let entries = scan_entries(config, &options.entry)?;

    config
        .resolve
        .extensions
        .extend(COFFEE_EXTENSIONS.iter().map(|ext| ext.to_string()));
    config.resolve.modules.extend(options.modules.iter().cloned());

    debug!(count = entries.len(), "replacing entry points");
    config.entry = entries;

    let lint_config = absolute_context(&config.context)?
        .join(&options.lint_config)
        .clean();
    config.module.rules.push(
        Rule::new(COFFEE_TEST).enforce(Enforce::Pre).loader(
            UseEntry::new(COFFEELINT_LOADER).with_options(json!({
                "configFile": lint_config.to_string_lossy(),
                "failOnErrors": true,
                "failOnWarnings": false,
            })),
        ),
    );
    config
        .module
        .rules
        .push(Rule::new(COFFEE_TEST).loader(UseEntry::new(COFFEE_LOADER)));

    Ok(())
}

/// Find entry points under each search path.
///
/// Entries are keyed by file stem and stored as absolute paths, so they stay
/// valid whatever the context or working directory. Matches are visited in
/// sorted order, so when two files share a stem the later path wins.
pub fn scan_entries(
    config: &BuildConfig,
    search_paths: &[String],
) -> Result<IndexMap<String, EntryPaths>> {
    let context = absolute_context(&config.context)?;
    let mut found = Vec::new();

    for search_path in search_paths {
        let base = search_base(&context, search_path);
        for ext in ENTRY_EXTENSIONS {
            let pattern = format!("{base}/*.{ext}");
            trace!(%pattern, "scanning for entries");

            let paths = glob::glob(&pattern).map_err(|e| ConfigError::EntryPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;

            for path in paths {
                let path = path.map_err(|e| ConfigError::EntryScan {
                    path: e.path().to_path_buf(),
                    message: e.error().to_string(),
                })?;
                if path.is_file() {
                    found.push(path);
                }
            }
        }
    }

    found.sort();
    found.dedup();

    let mut entries = IndexMap::with_capacity(found.len());
    for path in found {
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        entries.insert(stem, EntryPaths::One(path));
    }

    Ok(entries)
}

fn absolute_context(context: &Path) -> Result<PathBuf> {
    let context = if context.is_absolute() {
        context.to_path_buf()
    } else {
        std::env::current_dir()?.join(context)
    };
    Ok(context.clean())
}

fn search_base(context: &Path, search_path: &str) -> String {
    let search_path = search_path.trim_end_matches('/');
    if Path::new(search_path).is_absolute() {
        return search_path.to_string();
    }

    let context = glob::Pattern::escape(&context.to_string_lossy());
    let context = context.trim_end_matches('/');
    if search_path.is_empty() || search_path == "." {
        context.to_string()
    } else {
        format!("{context}/{}", search_path.trim_start_matches("./"))
    }
}
