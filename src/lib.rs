pub mod driver;
pub mod time;
pub mod units;

pub(crate) mod container;
pub(crate) mod entities;
pub(crate) mod error;
pub(crate) mod queue;
pub(crate) mod resource;
pub(crate) mod simulation;
pub(crate) mod trace;

pub use driver::{read_config, run, Config};
pub use entities::car::CarId;
pub use error::Error;
pub use trace::{TraceEvent, TraceKind};
