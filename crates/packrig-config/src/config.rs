//! The build configuration record mutated by the presets.
//!
//! Only the fields the presets touch are modeled. Everything else in a loaded
//! document is carried through `extra` so saving never drops caller settings.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result as ConfigResult};
use crate::externals::Externals;
use crate::plugin::{Plugin, PluginKind};
use crate::rule::Rule;

/// Debug-map format
///
/// Known names get their own variant. `false` disables debug maps and any
/// other name is kept verbatim, so every value the engine accepts loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DevtoolValue", into = "DevtoolValue")]
pub enum Devtool {
    Disabled,
    Eval,
    EvalSourceMap,
    CheapEvalSourceMap,
    CheapModuleEvalSourceMap,
    CheapSourceMap,
    CheapModuleSourceMap,
    InlineSourceMap,
    HiddenSourceMap,
    NosourcesSourceMap,
    SourceMap,
    Other(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DevtoolValue {
    Flag(bool),
    Name(String),
}

impl Devtool {
    pub fn as_str(&self) -> Option<&str> {
        let name = match self {
            Devtool::Disabled => return None,
            Devtool::Eval => "eval",
            Devtool::EvalSourceMap => "eval-source-map",
            Devtool::CheapEvalSourceMap => "cheap-eval-source-map",
            Devtool::CheapModuleEvalSourceMap => "cheap-module-eval-source-map",
            Devtool::CheapSourceMap => "cheap-source-map",
            Devtool::CheapModuleSourceMap => "cheap-module-source-map",
            Devtool::InlineSourceMap => "inline-source-map",
            Devtool::HiddenSourceMap => "hidden-source-map",
            Devtool::NosourcesSourceMap => "nosources-source-map",
            Devtool::SourceMap => "source-map",
            Devtool::Other(name) => name,
        };
        Some(name)
    }
}

impl From<&str> for Devtool {
    fn from(name: &str) -> Self {
        match name {
            "eval" => Devtool::Eval,
            "eval-source-map" => Devtool::EvalSourceMap,
            "cheap-eval-source-map" => Devtool::CheapEvalSourceMap,
            "cheap-module-eval-source-map" => Devtool::CheapModuleEvalSourceMap,
            "cheap-source-map" => Devtool::CheapSourceMap,
            "cheap-module-source-map" => Devtool::CheapModuleSourceMap,
            "inline-source-map" => Devtool::InlineSourceMap,
            "hidden-source-map" => Devtool::HiddenSourceMap,
            "nosources-source-map" => Devtool::NosourcesSourceMap,
            "source-map" => Devtool::SourceMap,
            other => Devtool::Other(other.to_string()),
        }
    }
}

impl TryFrom<DevtoolValue> for Devtool {
    type Error = String;

    fn try_from(value: DevtoolValue) -> Result<Self, Self::Error> {
        match value {
            DevtoolValue::Flag(false) => Ok(Devtool::Disabled),
            DevtoolValue::Flag(true) => {
                Err("devtool accepts false or a format name, not true".to_string())
            }
            DevtoolValue::Name(name) => Ok(Devtool::from(name.as_str())),
        }
    }
}

impl From<Devtool> for DevtoolValue {
    fn from(devtool: Devtool) -> Self {
        match devtool {
            Devtool::Other(name) => DevtoolValue::Name(name),
            known => match known.as_str() {
                Some(name) => DevtoolValue::Name(name.to_string()),
                None => DevtoolValue::Flag(false),
            },
        }
    }
}

/// Files behind a single entry name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryPaths {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl EntryPaths {
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            EntryPaths::One(path) => std::slice::from_ref(path),
            EntryPaths::Many(paths) => paths,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Import specifier prefix → directory it resolves to
    #[serde(default)]
    pub alias: IndexMap<String, PathBuf>,

    /// Extensions tried when an import omits one
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Directories searched for bare module specifiers
    #[serde(default)]
    pub modules: Vec<PathBuf>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Processing rules, evaluated in list order
    #[serde(default)]
    pub rules: Vec<Rule>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Project root that relative paths are resolved against
    #[serde(default = "default_context")]
    pub context: PathBuf,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entry: IndexMap<String, EntryPaths>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    #[serde(default)]
    pub resolve: ResolveOptions,

    #[serde(default)]
    pub module: ModuleOptions,

    #[serde(default)]
    pub plugins: Vec<Plugin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externals: Option<Externals>,

    /// Settings this crate does not model, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_context() -> PathBuf {
    PathBuf::from(".")
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            context: default_context(),
            entry: IndexMap::new(),
            devtool: None,
            resolve: ResolveOptions::default(),
            module: ModuleOptions::default(),
            plugins: Vec::new(),
            externals: None,
            extra: Map::new(),
        }
    }
}

impl BuildConfig {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use packrig_config::BuildConfig;
    /// use serde_json::json;
    ///
    /// let config = BuildConfig::from_value(json!({
    ///     "context": "app",
    ///     "resolve": { "extensions": [".js"] },
    ///     "output": { "path": "dist" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.resolve.extensions, vec![".js".to_string()]);
    /// assert!(config.extra.contains_key("output"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Resolve `path` against the configuration's context directory.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf().clean()
        } else {
            self.context.join(path).clean()
        }
    }

    pub fn has_plugin(&self, kind: &PluginKind) -> bool {
        self.plugins.iter().any(|plugin| plugin.is(kind))
    }

    pub fn count_plugins(&self, kind: &PluginKind) -> usize {
        self.plugins.iter().filter(|plugin| plugin.is(kind)).count()
    }
}
