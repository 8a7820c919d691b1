use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::StyledStr;
use std::fmt::Display;
use std::io::{self, Write};

use crate::utils::error::PoacError;

const ERROR_STYLE: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::Red)));
const WARN_STYLE: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Output streams for one invocation.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    color: bool,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, color: bool) -> Self {
        Self { out, err, color }
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn println(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    /// Writes clap-rendered text to stdout, keeping styles only when color is on.
    pub fn print_styled(&mut self, text: &StyledStr) -> io::Result<()> {
        Self::write_styled(&mut *self.out, text, self.color)
    }

    pub fn eprint_styled(&mut self, text: &StyledStr) -> io::Result<()> {
        Self::write_styled(&mut *self.err, text, self.color)
    }

    pub fn error(&mut self, error: &PoacError) -> io::Result<()> {
        if self.color {
            writeln!(self.err, "{ERROR_STYLE}Error{ERROR_STYLE:#}: {}", error)
        } else {
            writeln!(self.err, "Error: {}", error)
        }
    }

    pub fn warn(&mut self, message: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(self.err, "{WARN_STYLE}Warning{WARN_STYLE:#}: {}", message)
        } else {
            writeln!(self.err, "Warning: {}", message)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    fn write_styled(stream: &mut dyn Write, text: &StyledStr, color: bool) -> io::Result<()> {
        if color {
            write!(stream, "{}", text.ansi())
        } else {
            write!(stream, "{}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefix_plain() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut out, &mut err, false);
        console
            .error(&PoacError::InvalidArgument {
                arg: "--bogus".to_string(),
            })
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "Error: invalid argument: --bogus\n");
    }

    #[test]
    fn test_error_prefix_colored() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut out, &mut err, true);
        console
            .error(&PoacError::UnknownCommand {
                name: "nope".to_string(),
            })
            .unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with('\u{1b}'));
        assert!(err.ends_with(": no such command: `nope`\n"));
    }

    #[test]
    fn test_warn_prefix() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut out, &mut err, false);
        console.warn("config file `x` does not exist").unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Warning: config file `x` does not exist\n"
        );
    }

    #[test]
    fn test_println() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut out, &mut err, false);
        console.println("poac 0.7.0").unwrap();
        assert_eq!(out, b"poac 0.7.0\n");
    }
}
