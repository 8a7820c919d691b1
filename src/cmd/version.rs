use clap::Args;

use crate::cmd::{Context, Execute};
use crate::config::Verbosity;
use crate::utils::error::{Result, EXIT_SUCCESS};
use crate::version::VersionInfo;

#[derive(Debug, Clone, Default, Args)]
pub struct VersionArgs {}

impl Execute for VersionArgs {
    fn execute(&self, ctx: &mut Context<'_, '_>) -> Result<i32> {
        print_version(ctx, &VersionInfo::current())
    }
}

pub fn print_version(ctx: &mut Context<'_, '_>, info: &VersionInfo) -> Result<i32> {
    tracing::debug!("printing version {}", info.version);

    if ctx.settings.verbosity == Verbosity::Verbose {
        ctx.console.println(info.verbose())?;
    } else {
        ctx.console.println(info.short())?;
    }
    Ok(EXIT_SUCCESS)
}
