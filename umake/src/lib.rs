//! umake: build programs written in Rust.
//!
//! A build program declares named units, each wrapping an action, wires them
//! into a dependency graph and hands the command line to [`main`]:
//!
//! ```no_run
//! use umake::core::Registry;
//! use umake::utils::paths;
//!
//! fn main() {
//!     let registry = Registry::new();
//!     let assets = registry
//!         .register("assets", || paths::copy_dir("bin", "assets"), true)
//!         .unwrap();
//!     let foo = registry
//!         .register("foo", || Ok(umake::tool::cargo::build("foo", &["--release"])?), true)
//!         .unwrap();
//!     foo.add_dependency(&assets).unwrap();
//!     registry
//!         .register("clean", || paths::remove_dirs(&["bin"]), false)
//!         .unwrap();
//!     umake::main(&registry);
//! }
//! ```
//!
//! Every unit runs at most once per build, after all of its dependencies.
//! Without unit names on the command line, the units registered as default run.

pub mod core;
pub mod driver;
pub mod tool;
pub mod utils;

mod cli;
pub use cli::{execute, exit_with_error, main, BuildArgs};
