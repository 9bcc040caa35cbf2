//! packrig CLI - apply composable presets to a bundler configuration.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - Command implementations
//! - [`config`] - Layered preset loading
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status lines

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
