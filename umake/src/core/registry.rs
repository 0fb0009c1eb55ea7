use crate::core::{Error, Unit, UnitName};
use crate::utils::{Graph, IResult, lev_distance};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};


/// Graph of units that depend on eachother
pub type UnitGraph = Graph<Unit>;


/// Registered units keyed by their lower-cased name.
///
/// Iteration is in name order, which is also the order default units run in.
#[derive(Default)]
pub struct UnitMap {
    units: BTreeMap<UnitName, Unit>,
}

impl UnitMap {
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn named(&self, name: &str) -> Option<&Unit> {
        self.units.get(&UnitName::normalize(name))
    }

    /// Looks up `name`, suggesting the closest registered name when it is unknown.
    pub fn resolve(&self, name: &str) -> Result<&Unit, Error> {
        self.named(name).ok_or_else(|| {
            let wanted = UnitName::normalize(name);
            Error::UnknownUnit {
                name: name.to_string(),
                suggestion: lev_distance::closest(
                    wanted.as_str(),
                    self.units.keys(),
                    |n| n.as_str(),
                ).cloned(),
            }
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &UnitName> {
        self.units.keys()
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// All units currently flagged default, sorted by name.
    pub fn defaults(&self) -> Vec<Unit> {
        self.units
            .values()
            .filter(|u| u.is_default())
            .cloned()
            .collect()
    }

    /// Resolves every requested name up front, or the default units if
    /// nothing was requested.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Unit>, Error> {
        if names.is_empty() {
            return Ok(self.defaults());
        }
        names
            .iter()
            .map(|name| self.resolve(name.as_ref()).cloned())
            .collect()
    }

    /// Collects the units reachable from `selected` into a graph whose
    /// edges point from a unit to its dependencies.
    pub fn build_graph(selected: &[Unit]) -> UnitGraph {
        let mut g = UnitGraph::new();
        for unit in selected {
            if !g.contains(unit) {
                g.add(unit.clone());
                Self::build_graph_recursive(unit, &mut g);
            }
        }
        g
    }

    /// Fails with [`Error::CycleDetected`] naming the units of the first
    /// strongly connected component found in `g`.
    pub fn check_acyclic(g: &UnitGraph) -> Result<(), Error> {
        let cycles = g.cycles();
        if let Some(cycle) = cycles.iter(g).next() {
            return Err(Error::CycleDetected {
                units: cycle.map(|u| u.name().to_string()).collect(),
            });
        }
        Ok(())
    }

    fn build_graph_recursive(unit: &Unit, g: &mut UnitGraph) {
        for dep in unit.dependencies() {
            let seen = g.contains(&dep);
            g.link(unit.clone(), dep.clone());
            if !seen {
                Self::build_graph_recursive(&dep, g);
            }
        }
    }

    fn insert(&mut self, unit: Unit) -> Option<Unit> {
        self.units.insert(unit.name().clone(), unit)
    }
}


/// The set of units known to one build session.
///
/// A single lock guards the map. It is held for each registration and for
/// the whole of a [`Build`](crate::core::Build) invocation, so a build never
/// overlaps with registration or with another build on the same registry.
#[derive(Default)]
pub struct Registry {
    units: Mutex<UnitMap>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new unit named `name`, with `action` as its body.
    ///
    /// `is_default` determines if the unit runs when a build is invoked
    /// without any unit names. Registering a name that already exists
    /// replaces the previous unit; handles to the old unit stay usable but
    /// it can no longer be found by name.
    pub fn register<F>(&self, name: &str, action: F, is_default: bool) -> Result<Unit, Error>
    where
        F: FnMut() -> IResult<()> + Send + 'static,
    {
        let unit = Unit::new(UnitName::new(name)?, action, is_default);
        self.lock().insert(unit.clone());
        Ok(unit)
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<Unit> {
        self.lock().named(name).cloned()
    }

    pub fn default_units(&self) -> Vec<Unit> {
        self.lock().defaults()
    }

    pub fn names(&self) -> Vec<UnitName> {
        self.lock().names().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Takes the session lock.
    pub fn lock(&self) -> MutexGuard<'_, UnitMap> {
        self.units.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.lock().names()).finish()
    }
}
