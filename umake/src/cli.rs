use crate::core::{Build, Config, Registry};
use crate::utils::{IResult, Shell, Verbosity};
use clap::Parser;
use std::io::Write;


/// Command line of a build program.
#[derive(Debug, Default, Parser)]
#[command(about = "Runs the units of this build program")]
pub struct BuildArgs {
    /// Units to run. Runs the default units when empty.
    #[arg(value_name = "UNIT")]
    pub units: Vec<String>,

    /// Print the units that would run, in order, without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Also report units that were already finished
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, value_name = "WHEN")]
    pub color: Option<String>,
}


/// Entry point of a build program, called once all units are registered.
///
/// Parses the process arguments, runs the build and exits the process:
/// with status 0 on success, or after printing the error with status 1.
pub fn main(registry: &Registry) -> ! {
    let config = match Config::default() {
        Ok(config) => config,
        Err(e) => exit_with_error(e, &mut Shell::new()),
    };
    let args = BuildArgs::parse();
    if let Err(e) = execute(&config, registry, &args) {
        exit_with_error(e, &mut config.shell());
    }
    std::process::exit(0)
}

/// Runs (or with `--dry-run`, plans) the build described by `args`.
pub fn execute(config: &Config, registry: &Registry, args: &BuildArgs) -> IResult<()> {
    {
        let mut shell = config.shell();
        if args.color.is_some() {
            shell.set_color_choice(args.color.as_deref())?;
        }
        if args.verbose {
            shell.set_verbosity(Verbosity::Verbose);
        } else if args.quiet {
            shell.set_verbosity(Verbosity::Quiet);
        }
    }

    let build = Build::new(config, registry);
    if args.dry_run {
        for unit in build.plan(&args.units)? {
            drop(config.shell().status("Planned", &unit));
        }
    } else {
        build.run(&args.units)?;
    }
    Ok(())
}

/// Prints `err` and its causes, then exits with status 1.
pub fn exit_with_error(err: impl Into<anyhow::Error>, shell: &mut Shell) -> ! {
    let err = err.into();
    drop(shell.error(&err));
    for cause in err.chain().skip(1) {
        drop(writeln!(shell.err(), "\nCaused by:\n  {}", cause));
    }
    std::process::exit(1)
}
