use umake::tool::{self, ErrorKind};


#[test]
fn output_captures_stdout() {
    let out = tool::output(".", "rustc", &["-vV"]).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("host: "), "{}", out);
}

#[test]
fn run_inherits_streams() {
    tool::run(".", "rustc", &["--version"]).unwrap();
}

#[test]
fn missing_tool_is_not_found() {
    let err = tool::run(".", "umake-no-such-tool", &["x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ToolNotFound);
    assert!(err.to_string().contains("umake-no-such-tool"), "{}", err);
}

#[test]
fn failing_tool_includes_stderr() {
    let err = tool::output(".", "rustc", &["--no-such-flag"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ToolFailed);
    assert!(err.to_string().contains("Stderr:"), "{}", err);
}

#[test]
fn look_path_finds_rustc() {
    assert!(tool::which("rustc").is_some());
    assert!(tool::which("umake-no-such-tool").is_none());
    assert_eq!(
        tool::look_path("umake-no-such-tool"),
        std::path::PathBuf::from("umake-no-such-tool"),
    );
}

#[test]
fn build_options_default_to_host() {
    let opts = tool::BuildOptions::new();
    assert!(!opts.target.os.is_empty());
    assert!(!opts.target.arch.is_empty());
}
