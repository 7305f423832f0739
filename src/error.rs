use crate::{time::Time, units::Liters};

/// Fatal simulation errors. None of these are recoverable: blocking on a
/// resource or on fuel is normal flow, so anything surfacing here indicates a
/// configuration or modeling bug and terminates the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("requested {requested} liters from a container of capacity {capacity}")]
    InvalidAmount { requested: Liters, capacity: Liters },

    #[error("putting {amount} liters would overfill the container ({level} of {capacity})")]
    Overfill {
        amount: Liters,
        level: Liters,
        capacity: Liters,
    },

    #[error("event due at {time}ms precedes the current time {now}ms")]
    TimeInversion { time: Time, now: Time },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("serde error")]
    Serde(#[from] serde_json::Error),
}
