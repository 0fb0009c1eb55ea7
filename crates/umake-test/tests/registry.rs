mod support;

use support::Log;
use umake::core::{Error, Registry, UnitGraph, UnitMap};


#[test]
fn lookup_is_case_insensitive() {
    let registry = Registry::new();
    let log = Log::new();
    let foo = log.unit(&registry, "Foo", false);
    assert_eq!(foo.name().as_str(), "foo");
    assert_eq!(registry.get("foo"), Some(foo.clone()));
    assert_eq!(registry.get("FOO"), Some(foo.clone()));
    assert_eq!(registry.get("fOo"), Some(foo));
    assert_eq!(registry.get("bar"), None);
}

#[test]
fn reregistering_replaces_previous_unit() {
    let registry = Registry::new();
    let log = Log::new();
    let old = registry.register("build", log.action("old"), true).unwrap();
    let new = registry.register("BUILD", log.action("new"), false).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("build"), Some(new.clone()));
    assert_ne!(old, new);
    assert!(registry.default_units().is_empty());

    // The old handle still works, it just can't be found by name anymore
    old.run().unwrap();
    new.run().unwrap();
    assert_eq!(log.entries(), ["old", "new"]);
}

#[test]
fn default_units_sorted_by_name() {
    let registry = Registry::new();
    let log = Log::new();
    log.unit(&registry, "c", true);
    log.unit(&registry, "B", false);
    log.unit(&registry, "a", true);
    log.unit(&registry, "d", true).set_default(false);

    let defaults: Vec<String> = registry
        .default_units()
        .iter()
        .map(|u| u.name().to_string())
        .collect();
    assert_eq!(defaults, ["a", "c"]);
    assert_eq!(registry.names(), ["a", "b", "c", "d"]);
}

#[test]
fn invalid_names_are_rejected() {
    let registry = Registry::new();
    let log = Log::new();
    for name in ["", "two words", " lead"] {
        let err = registry.register(name, log.action(name), true).unwrap_err();
        assert!(matches!(err, Error::InvalidName(ref n) if n == name), "{:?}", err);
    }
    assert!(registry.is_empty());
}

#[test]
fn registration_does_not_run_anything() {
    let registry = Registry::new();
    let log = Log::new();
    let a = log.unit(&registry, "a", true);
    let b = log.unit(&registry, "b", true);
    a.add_dependency(&b).unwrap();
    assert!(log.entries().is_empty());
    assert!(!a.is_finished() && !b.is_finished());
}

#[test]
fn debug_lists_names() {
    let registry = Registry::new();
    let log = Log::new();
    log.unit(&registry, "Zeta", false);
    log.unit(&registry, "alpha", false);
    assert_eq!(format!("{:?}", registry), "[alpha, zeta]");
}

#[test]
fn check_acyclic_reports_cycle_members() {
    let registry = Registry::new();
    let log = Log::new();
    let [a, b, c] = ["a", "b", "c"].map(|n| log.unit(&registry, n, false));

    let mut g = UnitGraph::new();
    g.link(a.clone(), b.clone());
    g.link(b.clone(), c.clone());
    assert!(UnitMap::check_acyclic(&g).is_ok());

    g.link(c.clone(), a.clone());
    let err = UnitMap::check_acyclic(&g).unwrap_err();
    match &err {
        Error::CycleDetected { units } => {
            let mut units = units.clone();
            units.sort();
            assert_eq!(units, ["a", "b", "c"]);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(err.to_string().starts_with("dependency cycle between units: "), "{}", err);
    assert_eq!(err.unit(), None);
}

#[test]
fn build_graph_of_acyclic_units_passes_check() {
    let registry = Registry::new();
    let log = Log::new();
    let [a, b, c] = ["a", "b", "c"].map(|n| log.unit(&registry, n, false));
    a.add_dependency(&b).unwrap();
    a.add_dependency(&c).unwrap();
    b.add_dependency(&c).unwrap();

    let g = UnitMap::build_graph(&[a]);
    assert_eq!(g.len(), 3);
    assert!(UnitMap::check_acyclic(&g).is_ok());
}
