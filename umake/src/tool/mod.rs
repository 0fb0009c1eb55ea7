//! Process-spawning helpers for unit actions: PATH lookup, running programs
//! and the cargo subcommands a Rust build usually needs.

pub mod cargo;

mod cmd;
pub use cmd::{output, run, spawn};

mod error;
pub use error::{Error, ErrorKind};

pub use umake_platform::{BuildOptions, BuildTarget};

use std::path::{Path, PathBuf};


/// Searches the directories in `PATH` for an executable named `exe`.
/// If `exe` has more than one path component it is only checked as-is.
pub fn which(exe: impl AsRef<Path>) -> Option<PathBuf> {
    let exe = exe.as_ref();

    // If |exe| is not just one "word," assume it's an actual path...
    if exe.components().count() > 1 {
        return Some(PathBuf::from(exe)).filter(|p| p.is_file());
    }

    // Loop through PATH entries searching for the |exe|.
    let path_entries = std::env::var_os("PATH")?;
    std::env::split_paths(&path_entries).find_map(|path_entry| {
        let path = path_entry.join(exe);
        if path.is_file() {
            return Some(path);
        }
        if !std::env::consts::EXE_SUFFIX.is_empty() {
            let mut with_suffix = path.into_os_string();
            with_suffix.push(std::env::consts::EXE_SUFFIX);
            let path = PathBuf::from(with_suffix);
            if path.is_file() {
                return Some(path);
            }
        }
        None
    })
}

/// Like [`which`], but returns `exe` unchanged when it can not be found.
pub fn look_path(exe: impl AsRef<Path>) -> PathBuf {
    let exe = exe.as_ref();
    which(exe).unwrap_or_else(|| exe.to_path_buf())
}

/// Value of the environment variable `key`, if it is set to valid unicode.
pub fn env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
