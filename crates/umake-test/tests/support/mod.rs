#![allow(dead_code)]

use std::io::{self, Write};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use umake::core::{Config, Registry, Unit};
use umake::utils::{IResult, Shell};


/// Append-only log shared by the actions of a test.
#[derive(Clone, Default)]
pub struct Log(Arc<Mutex<Vec<String>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action appending `name` to the log.
    pub fn action(&self, name: &str) -> impl FnMut() -> IResult<()> + Send + 'static {
        let log = self.clone();
        let name = name.to_string();
        move || {
            log.0.lock().unwrap().push(name.clone());
            Ok(())
        }
    }

    /// Registers a unit whose action logs its own name.
    pub fn unit(&self, registry: &Registry, name: &str, is_default: bool) -> Unit {
        registry.register(name, self.action(name), is_default).unwrap()
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.entries().iter().filter(|e| *e == name).count()
    }

    /// Position of `name` in the log, panicking if it never ran.
    pub fn position(&self, name: &str) -> usize {
        self.entries()
            .iter()
            .position(|e| e == name)
            .unwrap_or_else(|| panic!("`{}` did not run: {:?}", name, self.entries()))
    }
}


/// In-memory writer for capturing shell output.
#[derive(Clone, Default)]
pub struct Buf(Arc<Mutex<Vec<u8>>>);

impl Buf {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Buf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}


/// Config whose shell writes to the returned buffer.
pub fn config() -> (Config, Buf) {
    let buf = Buf::default();
    let config = Config::new(
        Shell::from_write(buf.clone()),
        std::env::current_dir().unwrap(),
    );
    (config, buf)
}


/// Runs the `umake-fixture` build program with `args`.
pub fn fixture(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_umake-fixture"))
        .args(args)
        .env("UMAKE_COLOR", "never")
        .env_remove("UMAKE_VERBOSE")
        .output()
        .unwrap()
}

/// Command launching the `umake` driver.
pub fn driver() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_umake-driver"));
    cmd.env("UMAKE_COLOR", "never");
    cmd
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
