use clap::builder::StyledStr;
use clap::{Args, CommandFactory};

use crate::cmd::{Context, Execute};
use crate::config::cli::Cli;
use crate::utils::error::{PoacError, Result, EXIT_SUCCESS};

#[derive(Debug, Clone, Default, Args)]
pub struct HelpArgs {
    /// The subcommand whose help message to display
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}

impl Execute for HelpArgs {
    fn execute(&self, ctx: &mut Context<'_, '_>) -> Result<i32> {
        let help = render_help(self.command.as_deref())?;
        ctx.console.print_styled(&help)?;
        Ok(EXIT_SUCCESS)
    }
}

/// Renders the top-level help, or the help of one subcommand.
pub fn render_help(command: Option<&str>) -> Result<StyledStr> {
    let mut cli = Cli::command();
    cli.build();

    match command {
        None => Ok(cli.render_help()),
        Some(name) => cli
            .find_subcommand_mut(name)
            .map(|sub| sub.render_help())
            .ok_or_else(|| PoacError::UnknownCommand {
                name: name.to_string(),
            }),
    }
}
