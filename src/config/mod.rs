pub mod cli;
pub mod toml_config;

use crate::config::cli::GlobalArgs;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::{PoacError, Result};
use crate::utils::validation::Validate;
use clap::ValueEnum;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "POAC_CONFIG";
pub const COLOR_ENV: &str = "POAC_TERM_COLOR";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Accepted spellings, in declaration order.
    pub fn names() -> Vec<String> {
        Self::value_variants()
            .iter()
            .filter_map(ValueEnum::to_possible_value)
            .map(|value| value.get_name().to_string())
            .collect()
    }

    pub fn parse(field_name: &str, value: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(value, false).map_err(|_| {
            PoacError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: format!("expected one of: {}", Self::names().join(", ")),
            }
        })
    }

    /// Whether to emit ANSI styles on a stream that is or isn't a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Terminal settings resolved from defaults, the config file, and the environment.
/// Command-line flags are applied last through [`Settings::with_cli`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub color: ColorMode,
    pub verbosity: Verbosity,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with<F>(env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = config_path(&env)? {
            let file = TomlConfig::from_file_with(&path, &env)?;
            file.validate()?;
            settings.apply_file(&file)?;
        }

        settings.apply_env(&env)?;
        Ok(settings)
    }

    pub fn apply_file(&mut self, file: &TomlConfig) -> Result<()> {
        if let Some(color) = file.color() {
            self.color = ColorMode::parse("term.color", color)?;
        }
        if file.verbose() {
            self.verbosity = Verbosity::Verbose;
        } else if file.quiet() {
            self.verbosity = Verbosity::Quiet;
        }
        Ok(())
    }

    pub fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(color) = env(COLOR_ENV) {
            self.color = ColorMode::parse(COLOR_ENV, &color)?;
        }
        Ok(())
    }

    pub fn with_cli(self, global: &GlobalArgs) -> Self {
        Self {
            color: global.color.unwrap_or(self.color),
            verbosity: global.verbosity().unwrap_or(self.verbosity),
        }
    }
}

/// Locates the config file. A non-empty `POAC_CONFIG` must name an existing
/// file; the default locations are skipped when absent.
pub fn config_path<F>(env: F) -> Result<Option<PathBuf>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = env(CONFIG_ENV).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(explicit);
        if !path.is_file() {
            return Err(PoacError::ConfigError {
                message: format!("config file `{}` does not exist", path.display()),
            });
        }
        return Ok(Some(path));
    }

    let base = env("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| env("HOME").map(|home| PathBuf::from(home).join(".config")));

    Ok(base
        .map(|dir| dir.join("poac").join("config.toml"))
        .filter(|path| path.is_file()))
}
