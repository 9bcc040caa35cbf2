//! Processing rules appended to `module.rules`.
//!
//! A rule pairs a file pattern with an ordered chain of loaders. Loaders are
//! named by the identifier the external build engine resolves; nothing here
//! knows what a loader does.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stage a rule is forced into, ahead of or after normal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    Pre,
    Post,
}

/// A single loader in a rule's chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseEntry {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl UseEntry {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// A processing rule
///
/// `use` lists loaders in the engine's order: the last entry runs first on
/// a matched file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Regular expression source matched against the module path
    pub test: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(rename = "use", default)]
    pub uses: Vec<UseEntry>,
}

impl Rule {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            enforce: None,
            exclude: None,
            uses: Vec::new(),
        }
    }

    pub fn enforce(mut self, stage: Enforce) -> Self {
        self.enforce = Some(stage);
        self
    }

    pub fn loader(mut self, entry: UseEntry) -> Self {
        self.uses.push(entry);
        self
    }

    pub fn loader_names(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(|entry| entry.loader.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_use_key_and_skips_empty_fields() {
        let rule = Rule::new(r"\.js$")
            .enforce(Enforce::Pre)
            .loader(UseEntry::new("source-map-loader"));

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            json!({
                "test": "\\.js$",
                "enforce": "pre",
                "use": [{ "loader": "source-map-loader" }]
            })
        );
    }

    #[test]
    fn deserializes_without_use() {
        let rule: Rule = serde_json::from_value(json!({ "test": "\\.txt$" })).unwrap();
        assert!(rule.uses.is_empty());
        assert!(rule.enforce.is_none());
    }
}
