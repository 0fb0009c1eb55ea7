pub use anyhow::Error;
pub type IResult<T> = anyhow::Result<T>;

mod color;
pub use color::{Color, WriteColorExt};

mod command_ext;
pub use command_ext::CommandExt;

mod graph;
pub use graph::{Graph, GraphCycles, BitVec};

pub mod lev_distance;

pub mod paths;

mod shell;
pub use shell::{Shell, ColorChoice, Verbosity};
