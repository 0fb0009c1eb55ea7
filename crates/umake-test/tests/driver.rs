mod support;

use support::{driver, stderr, stdout};


#[test]
fn prints_version() {
    let out = driver().arg("-V").output().unwrap();
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), format!("umake {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_build_program() {
    let root = tempfile::tempdir().unwrap();
    let out = driver()
        .arg("-C")
        .arg(root.path())
        .args(["--", "assets"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("error: no build program found at `"), "{}", err);
    assert!(err.contains("Cargo.toml`"), "{}", err);
}

#[test]
fn root_is_relative_to_working_directory() {
    let cwd = tempfile::tempdir().unwrap();
    std::fs::create_dir(cwd.path().join("proj")).unwrap();
    let out = driver()
        .args(["-C", "proj"])
        .current_dir(cwd.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    let expected = std::path::Path::new("proj").join("build").join("Cargo.toml");
    assert!(err.contains(&*expected.to_string_lossy()), "{}", err);
}
