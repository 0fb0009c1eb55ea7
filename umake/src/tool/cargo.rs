//! `cargo` subcommands, each run in a given directory with extra arguments.
//!
//! The `CARGO` environment variable, when set (as it is for programs started
//! by `cargo run`), selects the cargo binary.

use super::{run, Error};
use std::ffi::{OsStr, OsString};
use std::path::Path;

pub fn build<S: AsRef<OsStr>>(dir: impl AsRef<Path>, args: &[S]) -> Result<(), Error> {
    cargo(dir, "build", args)
}

pub fn test<S: AsRef<OsStr>>(dir: impl AsRef<Path>, args: &[S]) -> Result<(), Error> {
    cargo(dir, "test", args)
}

pub fn install<S: AsRef<OsStr>>(dir: impl AsRef<Path>, args: &[S]) -> Result<(), Error> {
    cargo(dir, "install", args)
}

pub fn clean<S: AsRef<OsStr>>(dir: impl AsRef<Path>, args: &[S]) -> Result<(), Error> {
    cargo(dir, "clean", args)
}

pub fn run_bin<S: AsRef<OsStr>>(dir: impl AsRef<Path>, args: &[S]) -> Result<(), Error> {
    cargo(dir, "run", args)
}

pub fn fetch<S: AsRef<OsStr>>(dir: impl AsRef<Path>, args: &[S]) -> Result<(), Error> {
    cargo(dir, "fetch", args)
}

/// Runs `cargo <subcommand> <args>` in `dir`.
pub fn cargo<S: AsRef<OsStr>>(dir: impl AsRef<Path>, subcommand: &str, args: &[S]) -> Result<(), Error> {
    let mut full = Vec::with_capacity(args.len() + 1);
    full.push(OsString::from(subcommand));
    full.extend(args.iter().map(|a| a.as_ref().to_os_string()));
    run(dir, &program(), &full)
}

/// The cargo binary to invoke.
pub fn program() -> String {
    super::env("CARGO").unwrap_or_else(|| "cargo".to_string())
}
