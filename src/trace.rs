use std::fmt;

use smallvec::SmallVec;

use crate::{
    entities::car::CarId,
    time::{Delta, Time},
    units::Liters,
};

// Most handlers emit at most one trace record
pub(crate) type TraceList = SmallVec<[TraceEvent; 2]>;

/// A timestamped record of an observable simulation event. The run returns
/// these in occurrence order; their sequence and timestamps are the
/// simulation's output contract, the rendered wording is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TraceEvent {
    /// When the event occurred.
    pub time: Time,
    /// What happened.
    pub kind: TraceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TraceKind {
    /// The station fell below its threshold and called the tank truck.
    TruckCalled,
    /// The tank truck arrived and deposited `amount` liters.
    TruckArrived { amount: Liters },
    /// A car arrived at the station.
    CarArrived { car: CarId },
    /// A car finished refueling, `elapsed` after it arrived.
    CarRefueled { car: CarId, elapsed: Delta },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.time.into_f64() / 1e3;
        match self.kind {
            TraceKind::TruckCalled => write!(f, "Calling tank truck at {t:.1}"),
            TraceKind::TruckArrived { amount } => write!(
                f,
                "Tank truck arriving at time {t:.1}, refuelling {:.1} liters",
                amount.into_f64()
            ),
            TraceKind::CarArrived { car } => {
                write!(f, "Car {car} arriving at gas station at {t:.1}")
            }
            TraceKind::CarRefueled { car, elapsed } => write!(
                f,
                "Car {car} finished refueling in {:.1} seconds",
                elapsed.into_f64() / 1e3
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_seconds_with_one_decimal() {
        let ev = TraceEvent {
            time: Time::new(452_500),
            kind: TraceKind::CarRefueled {
                car: CarId::new(5),
                elapsed: Delta::new(302_500),
            },
        };
        assert_eq!(ev.to_string(), "Car 5 finished refueling in 302.5 seconds");
    }
}
