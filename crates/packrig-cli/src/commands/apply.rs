//! Apply command implementation.

use std::fs;

use packrig_config::{validate_schema, BuildConfig};
use tracing::info;

use crate::cli::ApplyArgs;
use crate::commands::utils;
use crate::config::load_presets;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the apply command.
///
/// Loads the build configuration and presets, applies them, checks the
/// result against the schema, and writes it to `--out` or stdout.
pub fn execute(args: ApplyArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;

    let mut config = utils::load_build_config(args.config.as_deref(), &cwd, true)?
        .unwrap_or_default();
    let preset_path = args.preset.as_deref().map(|p| utils::resolve_path(p, &cwd));
    let presets = load_presets(preset_path.as_deref(), &cwd, args.mode.map(Into::into))?;

    presets
        .apply(&mut config)
        .context("Failed to apply presets")?;
    validate_schema(&config)?;

    let rendered = render(&config, args.pretty)?;
    match args.out {
        Some(out) => {
            let out = utils::resolve_path(&out, &cwd);
            fs::write(&out, rendered + "\n").with_path(&out)?;
            info!(path = %out.display(), "wrote configuration");
            ui::success(&format!("Wrote {}", out.display()));
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render(config: &BuildConfig, pretty: bool) -> Result<String> {
    let value = config.to_value()?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.map_err(CliError::from)
}
