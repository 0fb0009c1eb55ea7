use crate::utils::{IResult, Shell, Verbosity};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use anyhow::Context;


/// Environment variable selecting color output: `auto`, `always` or `never`.
pub const COLOR_ENV: &str = "UMAKE_COLOR";

/// Environment variable selecting verbosity: `1` for verbose, `quiet` for quiet.
pub const VERBOSE_ENV: &str = "UMAKE_VERBOSE";


/// Configuration information for a build program. This is not specific to a
/// build, it is information relating to the process running it.
#[derive(Debug)]
pub struct Config {
    /// The current working directory of the process
    cwd: PathBuf,
    /// Information about how to write messages to the shell
    shell: Mutex<Shell>,
}

impl Config {
    /// Creates a new config instance.
    ///
    /// This is typically used for tests or other special cases. `default` is
    /// preferred otherwise.
    pub fn new(shell: Shell, cwd: PathBuf) -> Config {
        Config {
            shell: Mutex::new(shell),
            cwd,
        }
    }

    /// Creates a new Config instance, with all default settings.
    ///
    /// Color and verbosity are taken from `UMAKE_COLOR` and `UMAKE_VERBOSE`.
    pub fn default() -> IResult<Config> {
        let mut shell = Shell::new();
        if let Ok(color) = std::env::var(COLOR_ENV) {
            shell.set_color_choice(Some(&color))
                .with_context(|| format!("invalid value for `{}`", COLOR_ENV))?;
        }
        if let Ok(verbose) = std::env::var(VERBOSE_ENV) {
            shell.set_verbosity(verbosity_from_env(&verbose));
        }
        let cwd = std::env::current_dir()
            .with_context(|| "couldn't get the current directory of the process")?;
        Ok(Config::new(shell, cwd))
    }

    /// The current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Gets a reference to the shell, e.g., for writing error messages.
    pub fn shell(&self) -> MutexGuard<Shell> {
        self.shell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn verbosity_from_env(value: &str) -> Verbosity {
    match value {
        "1" | "true" => Verbosity::Verbose,
        "quiet" => Verbosity::Quiet,
        _ => Verbosity::Normal,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity_values() {
        assert_eq!(verbosity_from_env("1"), Verbosity::Verbose);
        assert_eq!(verbosity_from_env("quiet"), Verbosity::Quiet);
        assert_eq!(verbosity_from_env("0"), Verbosity::Normal);
        assert_eq!(verbosity_from_env(""), Verbosity::Normal);
    }
}
