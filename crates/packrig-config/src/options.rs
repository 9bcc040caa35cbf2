//! Default-merging for preset option records.
//!
//! Every preset has a typed options struct whose `Default` holds the
//! documented defaults. A partial record supplied by the caller (a JSON or
//! TOML table) is laid over those defaults one level deep: keys present in the
//! record win, absent keys keep the default, and nested tables are replaced
//! rather than merged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Lay `overrides` over `defaults` one level deep.
///
/// Neither input is modified; a new value is returned.
pub fn merge_shallow(defaults: &Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(base), Value::Object(update)) => {
            let mut merged = base.clone();
            for (key, value) in update {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        (base, Value::Null) => base.clone(),
        (_, other) => other.clone(),
    }
}

/// Build the effective options for `preset` from an optional partial record.
///
/// # Example
///
/// ```
/// use packrig_config::{resolve_options, StylesheetOptions};
/// use serde_json::json;
///
/// let partial = json!({ "optimize_images": false });
/// let options: StylesheetOptions = resolve_options("stylesheets", Some(&partial)).unwrap();
///
/// assert!(!options.optimize_images);
/// assert_eq!(options.image_folder, "images");
/// ```
pub fn resolve_options<T>(preset: &str, overrides: Option<&Value>) -> Result<T>
where
    T: Default + Serialize + DeserializeOwned,
{
    let Some(overrides) = overrides else {
        return Ok(T::default());
    };

    if !overrides.is_object() && !overrides.is_null() {
        return Err(ConfigError::InvalidOptions {
            preset: preset.to_string(),
            message: format!("expected a table of options, found {overrides}"),
        });
    }

    let defaults = serde_json::to_value(T::default()).map_err(|e| ConfigError::InvalidOptions {
        preset: preset.to_string(),
        message: e.to_string(),
    })?;

    let merged = merge_shallow(&defaults, overrides);
    serde_json::from_value(merged).map_err(|e| ConfigError::InvalidOptions {
        preset: preset.to_string(),
        message: e.to_string(),
    })
}
