//! packrig CLI entry point: argument parsing, logging setup and dispatch.

use clap::Parser;
use packrig_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Apply(apply_args) => commands::apply_execute(apply_args),
        cli::Command::Aliases(aliases_args) => commands::aliases_execute(aliases_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
