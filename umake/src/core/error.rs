use crate::core::UnitName;

/// Everything that can stop a build.
///
/// Re-registering a name, adding an edge that already exists and running a
/// finished unit are not errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown unit name `{name}`{}", did_you_mean(.suggestion))]
    UnknownUnit {
        name: String,
        suggestion: Option<UnitName>,
    },

    #[error("invalid unit name `{0}`: names must be non-empty and contain no whitespace")]
    InvalidName(String),

    #[error("unit `{unit}` cannot depend on `{dependency}`: `{dependency}` already depends on `{unit}`")]
    Cycle {
        unit: UnitName,
        dependency: UnitName,
    },

    #[error("dependency cycle between units: {}", .units.join(" -> "))]
    CycleDetected {
        units: Vec<String>,
    },

    #[error("failed to run unit `{unit}`")]
    Action {
        unit: UnitName,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    /// Name of the unit this error is about, if any.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::UnknownUnit { name, .. } => Some(name),
            Self::InvalidName(name) => Some(name),
            Self::Cycle { unit, .. } | Self::Action { unit, .. } => Some(unit.as_str()),
            Self::CycleDetected { .. } => None,
        }
    }
}

fn did_you_mean(suggestion: &Option<UnitName>) -> String {
    match suggestion {
        Some(name) => format!("\n\n\tDid you mean `{}`?", name),
        None => String::new(),
    }
}
