//! Command-line interface definition for prism.
//!
//! # Command Structure
//!
//! - `prism` - same as `prism build`
//! - `prism build` - emit every profile into the output directory
//! - `prism profiles` - show the resolved profiles without building


use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Prism - emit CommonJS, ES module and UMD bundles of a component
#[derive(Parser, Debug)]
#[command(
    name = "prism",
    version,
    about = "Emit CommonJS, ES module and UMD bundles of a component",
    long_about = "Prism compiles a package's entry module into four distribution formats:\n\
                  CommonJS, ES module, UMD development and minified UMD production,\n\
                  copies its stylesheet, and stamps every script with a license banner."
)]
pub struct Cli {
    /// Project directory containing package.json (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute (defaults to `build`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit every profile into the output directory
    Build(BuildArgs),

    /// List the resolved output profiles
    Profiles(ProfilesArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Build(BuildArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// Output directory, overriding configuration
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ProfilesArgs {
    /// Print profiles as JSON
    #[arg(long)]
    pub json: bool,
}
