mod build;
pub use build::Build;

mod config;
pub use config::Config;

mod error;
pub use error::Error;

mod registry;
pub use registry::{Registry, UnitGraph, UnitMap};

mod unit;
pub use unit::{Action, Unit, UnitState};

mod unit_name;
pub use unit_name::UnitName;
