use crate::Cfg;
use std::io;
use std::process::Command;
use std::thread;


/// The host target as reported by `rustc`.
#[derive(Debug)]
pub struct RustcTarget {
    target: String,
    cfgs: Vec<Cfg>,
}

impl RustcTarget {
    pub fn new(target: String, cfgs: Vec<Cfg>) -> Self {
        Self{target, cfgs}
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn cfgs(&self) -> &[Cfg] {
        &self.cfgs
    }

    /// Value of the first `key="value"` cfg with the given key.
    pub fn cfg_value(&self, key: &str) -> Option<&str> {
        self.cfgs
            .iter()
            .find(|c| c.key() == key)
            .and_then(Cfg::value)
    }

    /// Queries `rustc` for the host triple and cfgs, running both commands
    /// at the same time.
    pub fn detect() -> io::Result<Self> {
        let t = thread::spawn(Self::get_target);
        let c = thread::spawn(Self::get_cfgs);
        let rt = t.join().map_err(thread_error)?;
        let rc = c.join().map_err(thread_error)?;
        Ok(Self::new(rt?, rc?))
    }

    fn get_target() -> io::Result<String> {
        let stdout = rustc_stdout("-vV")?;
        for line in stdout.lines() {
            if let Some(host) = line.strip_prefix("host: ") {
                return Ok(host.trim().to_string());
            }
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("rustc -vV returned invalid data `{}`", stdout)
        ))
    }

    fn get_cfgs() -> io::Result<Vec<Cfg>> {
        let stdout = rustc_stdout("--print=cfg")?;
        // Lines we do not understand are skipped rather than failing detection
        Ok(stdout
            .lines()
            .filter_map(|line| line.parse().ok())
            .collect())
    }
}

fn rustc_stdout(arg: &str) -> io::Result<String> {
    let output = Command::new("rustc")
        .arg(arg)
        .output()?;
    if !output.status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("rustc {} exited with {}", arg, output.status)
        ));
    }
    String::from_utf8(output.stdout)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn thread_error(err: impl std::fmt::Debug) -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, format!("{:?}", err))
}
