use clap::{Args, Parser, Subcommand};

use crate::cmd::help::HelpArgs;
use crate::cmd::version::VersionArgs;
use crate::config::{ColorMode, Verbosity};

#[derive(Debug, Clone, Parser)]
#[command(name = "poac", bin_name = "poac")]
#[command(about = "A package manager and build system for C++")]
#[command(disable_version_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Print version info and exit
    #[arg(short = 'V', long = "version")]
    pub print_version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Options every subcommand accepts.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Use verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not print poac log messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        global = true,
        hide_possible_values = true
    )]
    pub color: Option<ColorMode>,
}

impl GlobalArgs {
    /// Verbosity requested on the command line, if any.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.verbose {
            Some(Verbosity::Verbose)
        } else if self.quiet {
            Some(Verbosity::Quiet)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Displays help for a poac subcommand
    Help(HelpArgs),

    /// Show the current poac version
    Version(VersionArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Help(_) => "help",
            Commands::Version(_) => "version",
        }
    }
}
