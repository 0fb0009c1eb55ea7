use crate::core::{Config, Error, UnitName};
use crate::utils::IResult;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};


// Held for the whole of `add_dependency`, so the reachability check and the
// edge insertion happen as one step across all threads.
static EDGES: Mutex<()> = Mutex::new(());

/// Body of a unit. Takes nothing and returns nothing the build can see;
/// whatever it does happens through side effects.
pub type Action = Box<dyn FnMut() -> IResult<()> + Send>;

/// Progress of a unit within one build session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    Pending,
    Finished,
}


/// A named build step: an action plus the units that must run before it.
///
/// `Unit` is a handle; clones share the same node and compare equal.
/// The node's own lock guards its flags, its dependency list and the
/// run-once transition from `Pending` to `Finished`.
#[derive(Clone)]
pub struct Unit(Arc<UnitInner>);

struct UnitInner {
    name: UnitName,
    data: Mutex<UnitData>,
}

struct UnitData {
    action: Action,
    depends: Vec<Unit>,
    is_default: bool,
    state: UnitState,
}


impl Unit {
    pub fn new<F>(name: UnitName, action: F, is_default: bool) -> Self
    where
        F: FnMut() -> IResult<()> + Send + 'static,
    {
        Self(Arc::new(UnitInner {
            name,
            data: Mutex::new(UnitData {
                action: Box::new(action),
                depends: Vec::new(),
                is_default,
                state: UnitState::Pending,
            }),
        }))
    }

    pub fn name(&self) -> &UnitName {
        &self.0.name
    }

    /// Whether this unit runs when a build is invoked without unit names.
    pub fn is_default(&self) -> bool {
        self.lock().is_default
    }

    pub fn set_default(&self, v: bool) {
        self.lock().is_default = v;
    }

    pub fn state(&self) -> UnitState {
        self.lock().state
    }

    /// Returns true if this unit has run to completion.
    pub fn is_finished(&self) -> bool {
        self.state() == UnitState::Finished
    }

    /// Direct dependencies in declaration order.
    pub fn dependencies(&self) -> Vec<Unit> {
        self.lock().depends.clone()
    }

    /// Adds `dep` as a direct dependency of this unit.
    ///
    /// Nothing is added if `dep` is already reachable from this unit.
    /// Fails with [`Error::Cycle`] if this unit is reachable from `dep`
    /// (including `dep` being this unit), as the edge would close a cycle.
    ///
    /// Must not be called from inside a running action.
    pub fn add_dependency(&self, dep: &Unit) -> Result<(), Error> {
        let _edges = EDGES.lock().unwrap_or_else(PoisonError::into_inner);

        // Walks `dep`'s subtree without ever locking `self`
        if dep.has_dependency(self) {
            return Err(Error::Cycle {
                unit: self.name().clone(),
                dependency: dep.name().clone(),
            });
        }

        let mut data = self.lock();
        if !has_dependency_rec(&data.depends, dep) {
            data.depends.push(dep.clone());
        }
        Ok(())
    }

    /// Returns true if this unit (directly or indirectly) depends on `dep`,
    /// or if `dep` is this unit.
    pub fn has_dependency(&self, dep: &Unit) -> bool {
        if self == dep {
            return true;
        }
        let data = self.lock();
        has_dependency_rec(&data.depends, dep)
    }

    /// Runs the unit's dependencies depth-first in declaration order, then
    /// the unit's own action unless it already finished.
    ///
    /// A failing action leaves its unit `Pending` and stops the walk; units
    /// that finished before the failure stay finished. The action runs with
    /// this unit locked, so it must not call back into its own unit.
    pub fn run(&self) -> Result<(), Error> {
        self.run_inner(None).map(drop)
    }

    /// Like [`Unit::run`], reporting progress to the config's shell.
    /// Returns how many actions ran.
    pub fn run_with(&self, config: &Config) -> Result<usize, Error> {
        self.run_inner(Some(config))
    }

    fn run_inner(&self, config: Option<&Config>) -> Result<usize, Error> {
        let mut data = self.lock();

        let mut ran = 0;
        for dep in data.depends.iter() {
            ran += dep.run_inner(config)?;
        }

        if data.state == UnitState::Finished {
            if let Some(config) = config {
                drop(config.shell().verbose(|s| s.status("Skipping", self.name())));
            }
            return Ok(ran);
        }

        if let Some(config) = config {
            drop(config.shell().status("Running", self.name()));
        }
        (data.action)().map_err(|source| Error::Action {
            unit: self.name().clone(),
            source,
        })?;
        data.state = UnitState::Finished;

        Ok(ran + 1)
    }

    fn lock(&self) -> MutexGuard<'_, UnitData> {
        self.0.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn has_dependency_rec(depends: &[Unit], want: &Unit) -> bool {
    depends.iter().any(|have| have.has_dependency(want))
}

impl Eq for Unit {}

impl PartialEq for Unit {
    fn eq(&self, other: &Unit) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::hash::Hash for Unit {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        std::ptr::hash(&*self.0, hasher)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

impl std::fmt::Debug for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Unit").field(&self.0.name).finish()
    }
}
