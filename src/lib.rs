pub mod cmd;
pub mod config;
pub mod utils;
pub mod version;

pub use cmd::{run, Context, Execute};
pub use config::{cli::Cli, ColorMode, Settings, Verbosity};
pub use utils::error::{PoacError, Result, EXIT_FAILURE, EXIT_SUCCESS};
pub use version::{VersionInfo, POAC_VERSION};
