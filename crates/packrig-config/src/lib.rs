//! Build configuration model and the presets that extend it.

pub mod config;
pub mod discovery;
pub mod error;
pub mod externals;
pub mod options;
pub mod plugin;
pub mod presets;
pub mod rule;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use externals::{ExternalItem, Externals};
pub use options::{merge_shallow, resolve_options};
pub use plugin::{Plugin, PluginKind};
pub use presets::*;
pub use rule::{Enforce, Rule, UseEntry};

// Re-export discovery and validation
pub use discovery::{discover, load_from, save_to, ConfigDiscovery, CONFIG_FILE};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
