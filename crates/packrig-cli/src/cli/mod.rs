//! Command-line interface definition.
//!
//! - `packrig apply` - Apply presets to a build configuration
//! - `packrig aliases` - Print dedupe aliases for a list of packages
//! - `packrig check` - Validate a build configuration

mod commands;

use clap::Parser;

pub use commands::{AliasesArgs, ApplyArgs, CheckArgs, Command, ModeArg};

/// packrig - composable presets for bundler configuration
#[derive(Parser, Debug)]
#[command(
    name = "packrig",
    version,
    about = "Apply composable presets to a bundler configuration",
    long_about = "packrig reads a bundler configuration document, applies presets for\n\
                  dependency dedupe, source maps, CoffeeScript, stylesheets and external\n\
                  libraries, and writes the extended document back out."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_apply_with_flags() {
        let cli = Cli::try_parse_from([
            "packrig",
            "apply",
            "--config",
            "build.json",
            "--mode",
            "production",
            "--pretty",
        ])
        .unwrap();

        let Command::Apply(args) = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.config, Some(PathBuf::from("build.json")));
        assert_eq!(args.mode, Some(ModeArg::Production));
        assert!(args.pretty);
    }

    #[test]
    fn aliases_requires_modules() {
        assert!(Cli::try_parse_from(["packrig", "aliases"]).is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["packrig", "-v", "-q", "check"]).is_err());
    }
}
