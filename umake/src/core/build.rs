use crate::core::*;
use std::time::Instant;


/// One build session over a [`Registry`].
///
/// Selects the units to run (the requested names, or every default unit when
/// none are given) and runs each one together with its dependencies.
pub struct Build<'a> {
    config: &'a Config,
    registry: &'a Registry,
}

impl<'a> Build<'a> {
    pub fn new(config: &'a Config, registry: &'a Registry) -> Self {
        Self { config, registry }
    }

    /// Runs the units named in `names`, in order. An empty list runs every
    /// default unit, in name order.
    ///
    /// Names are resolved one at a time, so units requested before an
    /// unknown name have already run when [`Error::UnknownUnit`] is returned.
    /// The first error stops the build.
    pub fn run<S: AsRef<str>>(&self, names: &[S]) -> Result<(), Error> {
        let units = self.registry.lock();
        let start = Instant::now();

        let mut ran = 0;
        if names.is_empty() {
            for unit in units.defaults() {
                ran += unit.run_with(self.config)?;
            }
        } else {
            for name in names {
                ran += units.resolve(name.as_ref())?.run_with(self.config)?;
            }
        }

        drop(self.config.shell().status("Finished", format!(
            "{} unit{} in {:.2}s",
            ran,
            if ran == 1 { "" } else { "s" },
            start.elapsed().as_secs_f64(),
        )));
        Ok(())
    }

    /// Returns the units that [`Build::run`] would execute, in execution
    /// order, without running anything. Finished units are left out.
    ///
    /// Unlike `run`, every name is resolved before anything else happens.
    pub fn plan<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Unit>, Error> {
        let units = self.registry.lock();
        let selected = units.select(names)?;
        let graph = UnitMap::build_graph(&selected);

        UnitMap::check_acyclic(&graph)?;

        Ok(graph
            .post_order(selected.iter())
            .into_iter()
            .filter(|u| !u.is_finished())
            .cloned()
            .collect())
    }
}
