use super::{look_path, Error};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};


/// Runs `program` with `args` in `dir` and waits for it to finish.
/// Standard streams are inherited; a non-zero exit status is an error.
pub fn run<S: AsRef<OsStr>>(dir: impl AsRef<Path>, program: &str, args: &[S]) -> Result<(), Error> {
    let mut cmd = command(dir.as_ref(), program, args);
    let mut child = start(&mut cmd, program)?;
    let status = wait_child(&cmd, program, &mut child)?;
    verify_status(&cmd, program, status, &[])
}

/// Starts `program` with `args` in `dir` without waiting for it.
pub fn spawn<S: AsRef<OsStr>>(dir: impl AsRef<Path>, program: &str, args: &[S]) -> Result<Child, Error> {
    let mut cmd = command(dir.as_ref(), program, args);
    start(&mut cmd, program)
}

/// Runs `program` with `args` in `dir` and returns what it wrote to stdout.
/// On a non-zero exit status the error includes what it wrote to stderr.
pub fn output<S: AsRef<OsStr>>(dir: impl AsRef<Path>, program: &str, args: &[S]) -> Result<Vec<u8>, Error> {
    let mut cmd = command(dir.as_ref(), program, args);
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    let child = start(&mut cmd, program)?;
    let output = child.wait_with_output().map_err(|e| Error::tool_exec(format!(
        "Command `{}` failed to run: {}\nArgs:\n{:?}",
        program, e, cmd
    )))?;
    verify_status(&cmd, program, output.status, &output.stderr)?;
    Ok(output.stdout)
}


fn command<S: AsRef<OsStr>>(dir: &Path, program: &str, args: &[S]) -> Command {
    let mut cmd = Command::new(look_path(program));
    cmd.args(args).current_dir(dir);
    cmd
}

// Start command and return child that can be waited on
fn start(cmd: &mut Command, program: &str) -> Result<Child, Error> {
    match cmd.spawn() {
        Ok(child) => Ok(child),

        Err(ref e) if e.kind() == std::io::ErrorKind::NotFound =>
            Err(Error::tool_not_found(format!(
                "Failed to find tool. Is `{}` installed?",
                program
            ))),

        Err(ref e) =>
            Err(Error::tool_exec(format!(
                "Command `{}` failed to start: {}\nArgs:\n{:?}",
                program, e, cmd
            ))),
    }
}

// Verify status code of command execution
fn verify_status(cmd: &Command, program: &str, status: ExitStatus, stderr: &[u8]) -> Result<(), Error> {
    if status.success() {
        return Ok(());
    }
    let mut message = format!(
        "Command `{}` returned with non-zero status code: {}\nArgs:\n{:?}",
        program, status, cmd
    );
    let stderr = String::from_utf8_lossy(stderr);
    if !stderr.trim().is_empty() {
        message.push_str("\nStderr:\n");
        message.push_str(stderr.trim_end());
    }
    Err(Error::tool_failed(message))
}

// Wait for child to finish executing
fn wait_child(cmd: &Command, program: &str, child: &mut Child) -> Result<ExitStatus, Error> {
    match child.wait() {
        Ok(s) => Ok(s),
        Err(ref e) =>
            Err(Error::tool_exec(format!(
                "Command `{}` failed to run: {}\nArgs:\n{:?}",
                program, e, cmd
            ))),
    }
}
