use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::BuildConfig;
use crate::externals::{ExternalItem, Externals};
use crate::plugin::{Plugin, PluginKind};

/// A library provided at runtime through a global variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLibrary {
    /// Module identifier used in imports
    pub module: String,

    /// Global variable the module is available under
    pub global: String,

    /// File copied verbatim into the output, together with `to`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<PathBuf>,

    /// Destination of `from`, relative to the output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<PathBuf>,
}

impl ExternalLibrary {
    pub fn new(module: impl Into<String>, global: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            global: global.into(),
            from: None,
            to: None,
        }
    }

    pub fn copy(mut self, from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }
}

/// Declare a module as external and optionally ship its file alongside the
/// bundle.
///
/// A copy plugin is added only when both `from` and `to` are set.
pub fn add_external(config: &mut BuildConfig, library: &ExternalLibrary) {
    Externals::append(
        &mut config.externals,
        ExternalItem::global(&library.module, &library.global),
    );
    debug!(module = %library.module, global = %library.global, "declared external");

    if let (Some(from), Some(to)) = (&library.from, &library.to) {
        config.plugins.push(Plugin::new(PluginKind::Copy).with_options(json!({
            "patterns": [{
                "from": from.to_string_lossy(),
                "to": to.to_string_lossy(),
            }],
            "options": { "cache": true },
        })));
        debug!(from = %from.display(), to = %to.display(), "added copy plugin");
    }
}
