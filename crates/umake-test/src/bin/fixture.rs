//! Build program used by the integration tests to observe exit statuses and
//! diagnostics. Each action prints its unit name to stdout.

use umake::core::{Error, Registry};
use umake::utils::IResult;

fn say(name: &'static str) -> impl FnMut() -> IResult<()> + Send + 'static {
    move || {
        println!("{}", name);
        Ok(())
    }
}

fn register(registry: &Registry) -> Result<(), Error> {
    let assets = registry.register("assets", say("assets"), true)?;
    let compile = registry.register("Compile", say("compile"), true)?;
    compile.add_dependency(&assets)?;

    registry.register("clean", say("clean"), false)?;

    let fail = registry.register("fail", || -> IResult<()> { anyhow::bail!("boom") }, false)?;
    fail.add_dependency(&assets)?;
    Ok(())
}

fn main() {
    let registry = Registry::new();
    if let Err(e) = register(&registry) {
        umake::exit_with_error(e, &mut umake::utils::Shell::new());
    }
    umake::main(&registry);
}
