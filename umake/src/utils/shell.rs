use crate::utils::{IResult, WriteColorExt};

use std::fmt;
use std::io::prelude::*;

use termcolor::Color::Green;
use termcolor::{self, Color, StandardStream, WriteColor};


/// Whether messages should use color output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Force color output
    Always,
    /// Force disable color output
    Never,
    /// Intelligently guess whether to use color output
    Auto,
}

impl std::str::FromStr for ColorChoice {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" => Ok(ColorChoice::Auto),
            arg => anyhow::bail!(
                "color choice must be auto, always, or never, but found `{}`",
                arg
            ),
        }
    }
}


/// The requested verbosity of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Verbose,
    Normal,
    Quiet,
}


/// An abstraction around console output that remembers preferences for output
/// verbosity and color.
///
/// Every status line and diagnostic a build prints goes through here.
pub struct Shell {
    /// Wrapper around stderr. This helps with supporting sending
    /// output to a memory buffer which is useful for tests.
    output: ShellOut,
    /// How verbose messages should be.
    verbosity: Verbosity,
}


/// A `Write`able object, either with or without color support
enum ShellOut {
    /// A plain write object without color support
    Write(Box<dyn Write + Send>),
    /// Color-enabled stderr, with information on whether color should be used
    Stream {
        stderr: StandardStream,
        color_choice: ColorChoice,
    },
}

impl Shell {
    /// Creates a new shell writing to stderr, defaulting to 'auto' color and normal output.
    pub fn new() -> Shell {
        let auto_clr = ColorChoice::Auto;
        Shell {
            output: ShellOut::Stream {
                stderr: StandardStream::stderr(auto_clr.to_termcolor()),
                color_choice: auto_clr,
            },
            verbosity: Verbosity::Normal,
        }
    }

    /// Creates a shell from a plain writable object, with no color, and normal output.
    pub fn from_write<W: Write + Send + 'static>(out: W) -> Shell {
        Shell {
            output: ShellOut::Write(Box::new(out)),
            verbosity: Verbosity::Normal,
        }
    }

    /// Prints a red 'error' message. Errors are printed even when quiet.
    pub fn error<T: fmt::Display>(&mut self, message: T) -> IResult<()> {
        self.output.message_stderr("error", &message)
    }

    /// Prints an amber 'warning' message.
    pub fn warn<T: fmt::Display>(&mut self, message: T) -> IResult<()> {
        match self.verbosity {
            Verbosity::Quiet => Ok(()),
            _ => self.output.message_stderr("warning", &message),
        }
    }

    /// Shortcut to right-align and color green a status message.
    pub fn status<T, U>(&mut self, status: T, message: U) -> IResult<()>
    where
        T: fmt::Display,
        U: fmt::Display,
    {
        self.print_justified(&status, Some(&message), Green)
    }

    /// Runs the callback only if we are in verbose mode.
    pub fn verbose<F>(&mut self, mut callback: F) -> IResult<()>
    where
        F: FnMut(&mut Shell) -> IResult<()>,
    {
        match self.verbosity {
            Verbosity::Verbose => callback(self),
            _ => Ok(()),
        }
    }

    /// Gets a reference to the underlying writer.
    pub fn err(&mut self) -> &mut dyn Write {
        match self.output {
            ShellOut::Stream { ref mut stderr, .. } => stderr,
            ShellOut::Write(ref mut w) => w,
        }
    }

    /// Gets the verbosity of the shell.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Updates the verbosity of the shell.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Gets the current color choice.
    ///
    /// If we are not using a color stream, this will always return `Never`, even if the color
    /// choice has been set to something else.
    pub fn color_choice(&self) -> ColorChoice {
        match self.output {
            ShellOut::Stream { color_choice, .. } => color_choice,
            ShellOut::Write(_) => ColorChoice::Never,
        }
    }

    /// Updates the color choice (always, never, or auto) from a string.
    pub fn set_color_choice(&mut self, color: Option<&str>) -> IResult<()> {
        let cfg = match color {
            Some(arg) => arg.parse()?,
            None => ColorChoice::Auto,
        };
        if let ShellOut::Stream {
            ref mut stderr,
            ref mut color_choice,
        } = self.output
        {
            *color_choice = cfg;
            *stderr = StandardStream::stderr(cfg.to_termcolor());
        }
        Ok(())
    }

    fn print_justified(
        &mut self,
        status: &dyn fmt::Display,
        msg: Option<&dyn fmt::Display>,
        color: Color
    ) -> IResult<()> {
        match self.verbosity {
            Verbosity::Quiet => Ok(()),
            _ => self.output.status_justified(status, msg, color)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellOut {
    /// Prints out a message with a status. The status comes first, and is bold plus the given color.
    fn message_stderr(&mut self, status: &str, msg: &dyn fmt::Display) -> IResult<()> {
        match *self {
            ShellOut::Stream { ref mut stderr, .. } => {
                stderr.reset()?;
                let colored = stderr.supports_color();
                stderr.write_status(status, colored)?;
                writeln!(stderr, " {}", msg)?;
            }
            ShellOut::Write(ref mut w) => {
                writeln!(w, "{}: {}", status, msg)?;
            }
        }
        Ok(())
    }

    fn status_justified(
        &mut self,
        status: &dyn fmt::Display,
        msg: Option<&dyn fmt::Display>,
        color: Color,
    ) -> IResult<()> {
        match *self {
            ShellOut::Stream { ref mut stderr, .. } => {
                stderr.write_status_justified(status, msg, color)?;
            }
            ShellOut::Write(ref mut w) => {
                write!(w, "{:>12}", status)?;
                match msg {
                    Some(msg) => writeln!(w, " {}", msg)?,
                    None => write!(w, " ")?,
                }
            }
        }
        Ok(())
    }
}

impl ColorChoice {
    /// Converts our color choice to termcolor's version.
    fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto => {
                if atty::is(atty::Stream::Stderr) {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
        }
    }
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("verbosity", &self.verbosity)
            .field("color_choice", &self.color_choice())
            .finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl Write for Buf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Buf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn status_is_right_aligned() {
        let buf = Buf::default();
        let mut shell = Shell::from_write(buf.clone());
        shell.status("Running", "assets").unwrap();
        assert_eq!(buf.text(), "     Running assets\n");
    }

    #[test]
    fn quiet_keeps_errors_only() {
        let buf = Buf::default();
        let mut shell = Shell::from_write(buf.clone());
        shell.set_verbosity(Verbosity::Quiet);
        shell.status("Running", "assets").unwrap();
        shell.warn("careful").unwrap();
        shell.error("boom").unwrap();
        assert_eq!(buf.text(), "error: boom\n");
    }

    #[test]
    fn verbose_callback() {
        let buf = Buf::default();
        let mut shell = Shell::from_write(buf.clone());
        shell.verbose(|s| s.status("Skipping", "a")).unwrap();
        assert_eq!(buf.text(), "");
        shell.set_verbosity(Verbosity::Verbose);
        shell.verbose(|s| s.status("Skipping", "a")).unwrap();
        assert_eq!(buf.text(), "    Skipping a\n");
    }

    #[test]
    fn color_choice_from_str() {
        assert_eq!("never".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!("sometimes".parse::<ColorChoice>().is_err());
        let mut shell = Shell::from_write(Buf::default());
        assert!(shell.set_color_choice(Some("sometimes")).is_err());
        assert_eq!(shell.color_choice(), ColorChoice::Never);
    }
}
