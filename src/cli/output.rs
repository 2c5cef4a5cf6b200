//! Coloured terminal output for progress and results.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes user-facing status lines.
///
/// Progress and success go to stdout, warnings and errors to stderr. Colour is
/// chosen automatically and disabled when `NO_COLOR` is set.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    color: ColorChoice,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        let color = if std::env::var_os("NO_COLOR").is_some() {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        };
        Self {
            verbose,
            quiet,
            color,
        }
    }

    fn write(
        &self,
        mut stream: StandardStream,
        prefix: &str,
        color: Color,
        message: &str,
    ) -> io::Result<()> {
        stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stream, "{prefix}")?;
        stream.reset()?;
        writeln!(stream, " {message}")
    }

    /// Detail line, only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.write(StandardStream::stdout(self.color), "  ·", Color::Cyan, message)
    }

    /// A step has started.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write(StandardStream::stdout(self.color), "==>", Color::Blue, message)
    }

    /// A step has finished successfully.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write(StandardStream::stdout(self.color), "✓", Color::Green, message)
    }

    /// Non-fatal problem.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write(StandardStream::stderr(self.color), "warning:", Color::Yellow, message)
    }

    /// Section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stream = StandardStream::stdout(self.color);
        stream.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stream, "\n{title}")?;
        stream.reset()
    }

    /// Indented plain line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stream = StandardStream::stdout(self.color);
        writeln!(stream, "    {message}")
    }
}
