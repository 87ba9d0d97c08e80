//! Prism CLI - emit every distribution format of a component in one run.
//!
//! Handles argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use prism_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match commands::resolve_cwd(args.cwd.as_deref()) {
        Ok(cwd) => match args.command.unwrap_or_default() {
            cli::Command::Build(build_args) => {
                commands::build_execute(build_args, &cwd, args.quiet).await
            }
            cli::Command::Profiles(profiles_args) => {
                commands::profiles_execute(profiles_args, &cwd)
            }
        },
        Err(e) => Err(e),
    };

    // Render through miette; a returned error exits with status 1
    result.map_err(error::cli_error_to_miette)
}
