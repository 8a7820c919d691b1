pub mod help;
pub mod version;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};

use crate::cmd::help::HelpArgs;
use crate::cmd::version::VersionArgs;
use crate::config::cli::{Cli, Commands};
use crate::config::{ColorMode, Settings};
use crate::utils::console::Console;
use crate::utils::error::{PoacError, Result, EXIT_SUCCESS};
use crate::utils::logger;

/// State handed to a subcommand.
pub struct Context<'c, 'a> {
    pub console: &'c mut Console<'a>,
    pub settings: Settings,
}

pub trait Execute {
    /// Runs the subcommand and returns the process exit status.
    fn execute(&self, ctx: &mut Context<'_, '_>) -> Result<i32>;
}

/// Parses `args` (including the program name), runs the selected
/// subcommand, and returns the exit status. All output goes to `out`/`err`.
pub fn run<I, T>(args: I, settings: Settings, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let color = settings.color.enabled(io::stdout().is_terminal());
    let mut console = Console::new(out, err, color);

    let code = match dispatch(args, settings, &mut console) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            let reported = match &e {
                PoacError::Cli(clap_err) => console.eprint_styled(&clap_err.render()),
                other => console.error(other),
            };
            if let Err(io_err) = reported {
                tracing::warn!("failed to report error: {}", io_err);
            }
            e.exit_code()
        }
    };

    if let Err(e) = console.flush() {
        tracing::warn!("failed to flush output: {}", e);
    }
    code
}

fn dispatch<I, T>(args: I, settings: Settings, console: &mut Console<'_>) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            if let Some(color) = color_flag(&args) {
                console.set_color(color.enabled(io::stdout().is_terminal()));
            }
            return handle_parse_error(console, e);
        }
    };

    let settings = settings.with_cli(&cli.global);
    console.set_color(settings.color.enabled(io::stdout().is_terminal()));
    logger::init_cli_logger(
        settings.verbosity,
        settings.color.enabled(io::stderr().is_terminal()),
    );
    tracing::debug!("parsed command line: {:?}", cli);

    let mut ctx = Context { console, settings };

    if cli.print_version {
        return VersionArgs::default().execute(&mut ctx);
    }

    match &cli.command {
        Some(command) => {
            tracing::debug!("running `{}`", command.name());
            match command {
                Commands::Help(args) => args.execute(&mut ctx),
                Commands::Version(args) => args.execute(&mut ctx),
            }
        }
        None => HelpArgs::default().execute(&mut ctx),
    }
}

/// The last valid `--color` on the command line, read token by token so it
/// still applies when clap stops early on `--help` or a usage error.
fn color_flag(args: &[OsString]) -> Option<ColorMode> {
    let mut color = None;
    let mut tokens = args.iter().skip(1).map(|arg| arg.to_str());

    while let Some(token) = tokens.next() {
        let value = match token {
            Some("--") => break,
            Some("--color") => tokens.next().flatten(),
            Some(token) => token.strip_prefix("--color="),
            None => None,
        };
        if let Some(mode) = value.and_then(|v| <ColorMode as ValueEnum>::from_str(v, false).ok()) {
            color = Some(mode);
        }
    }
    color
}

fn handle_parse_error(console: &mut Console<'_>, error: clap::Error) -> Result<i32> {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            console.print_styled(&error.render())?;
            Ok(EXIT_SUCCESS)
        }
        ErrorKind::UnknownArgument => Err(invalid_argument(error, ContextKind::InvalidArg)),
        ErrorKind::InvalidSubcommand => {
            Err(invalid_argument(error, ContextKind::InvalidSubcommand))
        }
        _ => Err(error.into()),
    }
}

fn invalid_argument(error: clap::Error, kind: ContextKind) -> PoacError {
    let arg = match error.get(kind) {
        Some(ContextValue::String(arg)) => Some(arg.clone()),
        _ => None,
    };
    match arg {
        Some(arg) => PoacError::InvalidArgument { arg },
        None => error.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<OsString> {
        std::iter::once("poac")
            .chain(tokens.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_color_flag_forms() {
        assert_eq!(color_flag(&argv(&["version", "--help"])), None);
        assert_eq!(
            color_flag(&argv(&["--color", "never", "version", "--help"])),
            Some(ColorMode::Never)
        );
        assert_eq!(
            color_flag(&argv(&["version", "--bogus", "--color=always"])),
            Some(ColorMode::Always)
        );
    }

    #[test]
    fn test_color_flag_last_valid_wins() {
        assert_eq!(
            color_flag(&argv(&["--color", "always", "version", "--color", "never"])),
            Some(ColorMode::Never)
        );
        assert_eq!(
            color_flag(&argv(&["--color", "never", "--color", "sometimes"])),
            Some(ColorMode::Never)
        );
    }

    #[test]
    fn test_color_flag_stops_at_separator() {
        assert_eq!(color_flag(&argv(&["version", "--", "--color", "never"])), None);
        assert_eq!(color_flag(&argv(&["version", "--color"])), None);
    }
}
