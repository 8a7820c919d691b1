use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

pub const LOG_ENV: &str = "POAC_LOG";

pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "off",
        Verbosity::Normal => "poac=info",
        Verbosity::Verbose => "poac=debug,info",
    }
}

/// Installs the stderr subscriber. Later calls leave the first subscriber in place.
pub fn init_cli_logger(verbosity: Verbosity, ansi: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(Verbosity::Quiet), "off");
        assert_eq!(default_directive(Verbosity::Normal), "poac=info");
        assert_eq!(default_directive(Verbosity::Verbose), "poac=debug,info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_cli_logger(Verbosity::Normal, false);
        init_cli_logger(Verbosity::Verbose, false);
    }
}
