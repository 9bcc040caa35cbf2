use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind tag carried by every plugin entry.
///
/// The tag is fixed when the entry is built or parsed, so classification is a
/// plain comparison and never depends on where a plugin implementation was
/// loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PluginKind {
    /// Packages already-emitted output into an archive; must run after every
    /// other plugin.
    Archive,
    /// Warns when several versions of one package end up in the bundle.
    DuplicatePackageChecker,
    /// Copies files verbatim into the output directory.
    Copy,
    /// Anything else, kept by name.
    Other(String),
}

impl PluginKind {
    pub fn as_str(&self) -> &str {
        match self {
            PluginKind::Archive => "archive",
            PluginKind::DuplicatePackageChecker => "duplicate-package-checker",
            PluginKind::Copy => "copy",
            PluginKind::Other(name) => name,
        }
    }

    /// Whether plugins of this kind belong at the very end of the list.
    pub fn is_final_stage(&self) -> bool {
        matches!(self, PluginKind::Archive)
    }
}

impl From<String> for PluginKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "archive" => PluginKind::Archive,
            "duplicate-package-checker" => PluginKind::DuplicatePackageChecker,
            "copy" => PluginKind::Copy,
            _ => PluginKind::Other(name),
        }
    }
}

impl From<&str> for PluginKind {
    fn from(name: &str) -> Self {
        PluginKind::from(name.to_string())
    }
}

impl From<PluginKind> for String {
    fn from(kind: PluginKind) -> Self {
        match kind {
            PluginKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plugin entry in `plugins`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    pub kind: PluginKind,

    /// Constructor options forwarded to the plugin implementation
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl Plugin {
    pub fn new(kind: impl Into<PluginKind>) -> Self {
        Self {
            kind: kind.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    pub fn is(&self, kind: &PluginKind) -> bool {
        &self.kind == kind
    }
}
