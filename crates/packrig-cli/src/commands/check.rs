//! Check command implementation.

use packrig_config::{validate_fs, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the build configuration
/// 2. Check rule patterns and externals
/// 3. Check entry points exist (unless `--schema-only`)
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let cwd = utils::get_cwd()?;
    let config = utils::load_build_config(args.config.as_deref(), &cwd, false)?.ok_or_else(
        || CliError::Custom("No packrig.config.json found\n\nHint: Pass --config <file>".into()),
    )?;

    if args.schema_only {
        validate_schema(&config)?;
    } else {
        validate_fs(&config, &cwd)?;
    }

    ui::success(&format!(
        "Configuration is valid ({} rules, {} plugins, {} entries)",
        config.module.rules.len(),
        config.plugins.len(),
        config.entry.len()
    ));
    Ok(())
}
