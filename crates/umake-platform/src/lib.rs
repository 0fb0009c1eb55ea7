//! Host and target platform detection for umake build programs.
//!
//! Actions usually want to know which operating system and architecture they
//! are building for. [`BuildOptions::new`] answers that by checking, in order:
//!
//!  1. `UMAKE_TARGET_OS` / `UMAKE_TARGET_ARCH` in the process environment,
//!  2. the host `target_os` / `target_arch` reported by `rustc --print=cfg`,
//!  3. the platform this program was compiled for.

mod cfg;
pub use cfg::Cfg;

mod rustc;
pub use rustc::RustcTarget;

use std::env;


/// Environment variable overriding the target operating system.
pub const TARGET_OS_ENV: &str = "UMAKE_TARGET_OS";

/// Environment variable overriding the target architecture.
pub const TARGET_ARCH_ENV: &str = "UMAKE_TARGET_ARCH";


/// A compilation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildTarget {
    pub os: String,
    pub arch: String,
}

/// Build properties set by the user or detected from the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub target: BuildTarget,
}

impl BuildOptions {
    /// Detects the build options for the current process.
    ///
    /// `rustc` is only consulted when one of the environment overrides is
    /// missing, and a failure to run it is not an error.
    pub fn new() -> Self {
        let os = env::var(TARGET_OS_ENV).ok().filter(|v| !v.is_empty());
        let arch = env::var(TARGET_ARCH_ENV).ok().filter(|v| !v.is_empty());
        let rustc = if os.is_none() || arch.is_none() {
            RustcTarget::detect().ok()
        } else {
            None
        };
        Self::resolve(os, arch, rustc.as_ref())
    }

    /// Combines explicit values with what `rustc` reported, falling back to
    /// the compile-time platform.
    pub fn resolve(
        os: Option<String>,
        arch: Option<String>,
        rustc: Option<&RustcTarget>,
    ) -> Self {
        let from_rustc = |key: &str| rustc.and_then(|r| r.cfg_value(key)).map(String::from);
        Self {
            target: BuildTarget {
                os: os
                    .or_else(|| from_rustc("target_os"))
                    .unwrap_or_else(|| env::consts::OS.to_string()),
                arch: arch
                    .or_else(|| from_rustc("target_arch"))
                    .unwrap_or_else(|| env::consts::ARCH.to_string()),
            },
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.arch, self.os)
    }
}
