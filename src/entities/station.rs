use crate::{
    container::Container,
    simulation::{Command, Context, Effects},
    time::Delta,
    trace::TraceKind,
};

use super::truck::TruckCmd;

/// Periodically checks the reservoir level and calls the tank truck when the
/// level falls below the threshold. While a truck is underway no polls are
/// scheduled; monitoring resumes one interval after the truck finishes.
#[derive(Debug, typed_builder::TypedBuilder)]
pub(crate) struct Station {
    threshold_pct: f64,
    poll_every: Delta,
    truck_transit: Delta,

    #[builder(default, setter(skip))]
    status: Status,
}

impl Station {
    #[must_use]
    pub(crate) fn poll(&mut self, fuel: &Container<Command>, mut ctx: Context) -> Effects {
        assert!(self.status == Status::Monitoring);
        let pct = fuel.level().into_f64() / fuel.capacity().into_f64() * 100.0;
        if pct < self.threshold_pct {
            // We need to call the tank truck now
            self.status = Status::new_dispatching();
            ctx.trace(TraceKind::TruckCalled);
            ctx.schedule(self.truck_transit, TruckCmd::new_arrive());
        } else {
            ctx.schedule(self.poll_every, StationCmd::new_poll());
        }
        ctx.into_effects()
    }

    #[must_use]
    pub(crate) fn truck_done(&mut self, mut ctx: Context) -> Effects {
        assert!(self.status == Status::Dispatching);
        self.status = Status::new_monitoring();
        ctx.schedule(self.poll_every, StationCmd::new_poll());
        ctx.into_effects()
    }
}

#[derive(Debug, Copy, Clone, derive_new::new)]
pub(crate) enum StationCmd {
    Poll,
    TruckDone,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_new::new, derivative::Derivative)]
#[derivative(Default)]
enum Status {
    #[derivative(Default)]
    Monitoring,
    Dispatching,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        time::Time,
        units::{Liters, LitersPerSec, Secs},
    };

    fn station() -> Station {
        Station::builder()
            .threshold_pct(10.0)
            .poll_every(Secs::new(10).into_delta())
            .truck_transit(Secs::new(300).into_delta())
            .build()
    }

    fn ctx() -> Context {
        Context::new(Time::ZERO, LitersPerSec::new(2))
    }

    #[test]
    fn exactly_at_threshold_keeps_monitoring() {
        let mut station = station();
        let fuel: Container<Command> = Container::new(Liters::new(200), Liters::new(20));
        let effects = station.poll(&fuel, ctx());
        assert!(effects.traces.is_empty());
        assert_eq!(effects.events.len(), 1);
        assert_eq!(effects.events[0].time(), Secs::new(10).into_time());
        assert!(matches!(
            effects.events[0].cmd,
            Command::Station(StationCmd::Poll)
        ));
    }

    #[test]
    fn below_threshold_dispatches_the_truck() {
        let mut station = station();
        let fuel: Container<Command> = Container::new(Liters::new(200), Liters::new(19));
        let effects = station.poll(&fuel, ctx());
        assert_eq!(effects.traces.len(), 1);
        assert_eq!(effects.traces[0].kind, TraceKind::TruckCalled);
        assert_eq!(effects.events.len(), 1);
        assert_eq!(effects.events[0].time(), Secs::new(300).into_time());
        assert!(matches!(
            effects.events[0].cmd,
            Command::Truck(TruckCmd::Arrive)
        ));
    }

    #[test]
    fn truck_done_resumes_polling() {
        let mut station = station();
        let fuel: Container<Command> = Container::new(Liters::new(200), Liters::ZERO);
        let _ = station.poll(&fuel, ctx());
        let effects = station.truck_done(ctx());
        assert_eq!(effects.events.len(), 1);
        assert!(matches!(
            effects.events[0].cmd,
            Command::Station(StationCmd::Poll)
        ));
    }
}
