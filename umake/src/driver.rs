use crate::core::Config;
use crate::tool;
use crate::utils::{paths, CommandExt, IResult, Shell};
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;


/// Runs the build program of a umake project.
///
/// The build program is the cargo package in `<root>/build`. It registers the
/// project's units and calls `umake::main`; every argument after `--` is
/// passed on to it.
#[derive(Debug, Parser)]
#[command(name = "umake", version)]
pub struct DriverArgs {
    /// Build root directory
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Directory for the compiled build program, relative to the build root
    #[arg(long, value_name = "DIR", default_value = "target/umake")]
    pub target_dir: PathBuf,

    /// Arguments for the build program (unit names and options)
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}


/// Entry point of the `umake` binary.
///
/// Only returns control to the caller's process through `exec`; any error
/// is printed and exits with status 1.
pub fn main() -> ! {
    let config = match Config::default() {
        Ok(config) => config,
        Err(e) => crate::exit_with_error(e, &mut Shell::new()),
    };
    let args = DriverArgs::parse();
    if let Err(e) = run_build_program(&config, &args) {
        crate::exit_with_error(e, &mut config.shell());
    }
    std::process::exit(0)
}

/// Compiles and runs `<root>/build` with cargo, replacing the current process.
pub fn run_build_program(config: &Config, args: &DriverArgs) -> IResult<()> {
    let root = paths::abs(config.cwd().join(&args.root))?;
    let manifest = root.join("build").join("Cargo.toml");
    if !paths::file_exists(&manifest) {
        anyhow::bail!("no build program found at `{}`", manifest.display());
    }
    let target_dir = root.join(&args.target_dir);

    drop(config.shell().status("Building", manifest.display()));

    Command::new(tool::look_path(tool::cargo::program()))
        .arg("run")
        .arg("--quiet")
        .arg("--manifest-path")
        .arg(&manifest)
        .arg("--target-dir")
        .arg(&target_dir)
        .arg("--")
        .args(&args.args)
        .current_dir(&root)
        .exec_replace()
}
