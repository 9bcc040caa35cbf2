use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use packrig_config::{Mode, DEFAULT_MODULES_FOLDER};

/// Available packrig subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply presets to a build configuration
    ///
    /// Presets run in a fixed order: dedupe, devtool, coffeescript,
    /// stylesheets, externals, and finally the plugin-order fix.
    Apply(ApplyArgs),

    /// Print the alias map that pins packages to a single copy
    Aliases(AliasesArgs),

    /// Validate a build configuration
    Check(CheckArgs),
}

/// Build mode selected on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Development,
    Production,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Build configuration to extend (default: packrig.config.json if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Preset file (default: packrig.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Build mode; overrides the preset file and PACKRIG_MODE
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the aliases command
#[derive(Args, Debug)]
pub struct AliasesArgs {
    /// Package names to pin
    #[arg(required = true, value_name = "MODULE")]
    pub modules: Vec<String>,

    /// Folder the packages are installed in
    #[arg(short, long, default_value = DEFAULT_MODULES_FOLDER)]
    pub folder: PathBuf,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build configuration to check (default: packrig.config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip checks that touch the filesystem
    #[arg(long)]
    pub schema_only: bool,
}
