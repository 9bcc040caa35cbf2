//! Configuration presets.
//!
//! Each preset is an independent mutation of a [`BuildConfig`]: it borrows the
//! record for one call, extends its lists and maps, and keeps nothing.
//! [`normalize_plugin_order`] is the only one with an ordering contract; it
//! belongs after all the others.

mod coffeescript;
mod dedupe;
mod devtool;
mod externals;
mod plugin_order;
mod stylesheets;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

pub use coffeescript::{
    add_coffeescript, scan_entries, CoffeeScriptOptions, COFFEELINT_LOADER, COFFEE_EXTENSIONS,
    COFFEE_LOADER, COFFEE_TEST, ENTRY_EXTENSIONS,
};
pub use dedupe::{
    dedupe_aliases, dedupe_aliases_in, dedupe_dependencies, DedupeOptions, DEFAULT_MODULES_FOLDER,
};
pub use devtool::{select_devtool, DEVELOPMENT_DEVTOOL, PRODUCTION_DEVTOOL, SOURCE_MAP_LOADER};
pub use externals::{add_external, ExternalLibrary};
pub use plugin_order::normalize_plugin_order;
pub use stylesheets::{
    add_stylesheets, StylesheetOptions, CSS_LOADER, CSS_TEST, FILE_LOADER, IMAGE_LOADER,
    IMAGE_TEST, STYLE_LOADER,
};

use crate::config::BuildConfig;
use crate::error::Result;
use crate::options::resolve_options;

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn is_dev(self) -> bool {
        matches!(self, Mode::Development)
    }
}

/// A declarative set of presets, typically read from `packrig.toml`.
///
/// Option sections are kept as partial records and merged over each preset's
/// defaults when applied. A present but empty section enables the preset with
/// its defaults; an absent section skips it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Presets {
    /// Selects the devtool when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedupe: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffeescript: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheets: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub externals: Vec<ExternalLibrary>,
}

impl Presets {
    /// Apply every configured preset, finishing with the plugin-order fix.
    pub fn apply(&self, config: &mut BuildConfig) -> Result<()> {
        if let Some(section) = &self.dedupe {
            let options: DedupeOptions = resolve_options("dedupe", Some(section))?;
            dedupe_dependencies(config, &options)?;
        }

        if let Some(mode) = self.mode {
            select_devtool(config, mode.is_dev());
        }

        if let Some(section) = &self.coffeescript {
            let options: CoffeeScriptOptions = resolve_options("coffeescript", Some(section))?;
            add_coffeescript(config, &options)?;
        }

        if let Some(section) = &self.stylesheets {
            let options: StylesheetOptions = resolve_options("stylesheets", Some(section))?;
            add_stylesheets(config, &options);
        }

        for library in &self.externals {
            add_external(config, library);
        }

        normalize_plugin_order(config);

        info!(
            rules = config.module.rules.len(),
            plugins = config.plugins.len(),
            "applied presets"
        );
        Ok(())
    }
}
