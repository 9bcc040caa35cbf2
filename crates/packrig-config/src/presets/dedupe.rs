use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::plugin::{Plugin, PluginKind};

pub const DEFAULT_MODULES_FOLDER: &str = "node_modules";

/// Options for [`dedupe_dependencies`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupeOptions {
    /// Package names that must resolve to a single copy
    pub modules: Vec<String>,

    /// Folder the packages live in, relative to the working directory
    pub folder: PathBuf,
}

impl Default for DedupeOptions {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            folder: PathBuf::from(DEFAULT_MODULES_FOLDER),
        }
    }
}

/// Map each module name to its directory inside `folder`, relative to the
/// current working directory.
pub fn dedupe_aliases<S: AsRef<str>>(
    modules: &[S],
    folder: impl AsRef<Path>,
) -> Result<IndexMap<String, PathBuf>> {
    let cwd = std::env::current_dir()?;
    Ok(dedupe_aliases_in(&cwd, modules, folder))
}

/// Same as [`dedupe_aliases`] with an explicit root directory.
///
/// A repeated module name keeps its first position and its last path.
pub fn dedupe_aliases_in<S: AsRef<str>>(
    root: &Path,
    modules: &[S],
    folder: impl AsRef<Path>,
) -> IndexMap<String, PathBuf> {
    let base = root.join(folder.as_ref());
    modules
        .iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), base.join(name).clean())
        })
        .collect()
}

/// Point every listed module at one copy and make sure duplicates get
/// reported.
///
/// Computed aliases replace existing aliases with the same key. The
/// duplicate-package-checker plugin is added only if none is present.
pub fn dedupe_dependencies(config: &mut BuildConfig, options: &DedupeOptions) -> Result<()> {
    let aliases = dedupe_aliases(options.modules.as_slice(), &options.folder)?;
    apply_aliases(config, aliases);
    Ok(())
}

pub(crate) fn apply_aliases(config: &mut BuildConfig, aliases: IndexMap<String, PathBuf>) {
    debug!(count = aliases.len(), "adding dedupe aliases");
    config.resolve.alias.extend(aliases);

    if !config.has_plugin(&PluginKind::DuplicatePackageChecker) {
        config.plugins.push(
            Plugin::new(PluginKind::DuplicatePackageChecker).with_options(json!({ "verbose": true })),
        );
    }
}
