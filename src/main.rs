use anyhow::Context as _;
use poac::utils::console::Console;
use poac::{ColorMode, Settings};
use std::io::{self, IsTerminal, Write};

fn main() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            let color = ColorMode::Auto.enabled(stderr.is_terminal());
            Console::new(&mut out, &mut err, color)
                .warn(format_args!("{}; falling back to default settings", e))
                .context("failed to write to stderr")?;
            Settings::default()
        }
    };

    let code = poac::run(std::env::args_os(), settings, &mut out, &mut err);

    out.flush().context("failed to flush stdout")?;
    err.flush().context("failed to flush stderr")?;
    drop(out);
    drop(err);

    std::process::exit(code);
}
