use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum PoacError {
    #[error("invalid argument: {arg}")]
    InvalidArgument { arg: String },

    #[error("no such command: `{name}`")]
    UnknownCommand { name: String },

    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PoacError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, PoacError>;
