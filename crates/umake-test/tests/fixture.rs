mod support;

use support::{fixture, stderr, stdout};


#[test]
fn runs_default_units() {
    let out = fixture(&[]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "assets\ncompile\n");
    let err = stderr(&out);
    assert!(err.contains("     Running assets\n"), "{}", err);
    assert!(err.contains("Finished 2 units in"), "{}", err);
}

#[test]
fn runs_named_units_case_insensitively() {
    let out = fixture(&["CLEAN"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "clean\n");
}

#[test]
fn unknown_unit_exits_with_error() {
    let out = fixture(&["nope", "assets"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("error: unknown unit name `nope`"), "{}", stderr(&out));
}

#[test]
fn unknown_unit_suggests_closest() {
    let out = fixture(&["cmpile"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Did you mean `compile`?"), "{}", stderr(&out));
}

#[test]
fn failing_unit_reports_cause() {
    let out = fixture(&["fail", "clean"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "assets\n");
    let err = stderr(&out);
    assert!(err.contains("error: failed to run unit `fail`"), "{}", err);
    assert!(err.contains("Caused by:\n  boom"), "{}", err);
}

#[test]
fn dry_run_prints_plan() {
    let out = fixture(&["--dry-run"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "");
    let err = stderr(&out);
    let assets = err.find("Planned assets").expect(&err);
    let compile = err.find("Planned compile").expect(&err);
    assert!(assets < compile);
}

#[test]
fn quiet_prints_nothing_on_success() {
    let out = fixture(&["-q"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "assets\ncompile\n");
    assert_eq!(stderr(&out), "");
}

#[test]
fn verbose_and_quiet_conflict() {
    let out = fixture(&["-v", "-q"]);
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
}
