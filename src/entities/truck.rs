use crate::{
    container::Container,
    error::Error,
    simulation::{Command, Context, Effects},
    trace::TraceKind,
};

use super::station::StationCmd;

/// Arrives at the station after its transit delay and refuels the reservoir
/// back to capacity in one deposit.
#[derive(Debug, Default, derive_new::new)]
pub(crate) struct TankTruck;

impl TankTruck {
    pub(crate) fn arrive(
        &mut self,
        fuel: &mut Container<Command>,
        mut ctx: Context,
    ) -> Result<Effects, Error> {
        let amount = fuel.capacity() - fuel.level();
        ctx.trace(TraceKind::TruckArrived { amount });
        // The deposit resumes fuel waiters in FIFO order at the current time
        for waiter in fuel.put(amount)? {
            ctx.schedule_now(waiter);
        }
        ctx.schedule_now(StationCmd::new_truck_done());
        Ok(ctx.into_effects())
    }
}

#[derive(Debug, Copy, Clone, derive_new::new)]
pub(crate) enum TruckCmd {
    Arrive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        time::Time,
        units::{Liters, LitersPerSec},
    };

    #[test]
    fn refuels_the_exact_deficit() {
        let mut truck = TankTruck::new();
        let mut fuel: Container<Command> = Container::new(Liters::new(200), Liters::new(45));
        let ctx = Context::new(Time::new(430_000), LitersPerSec::new(2));
        let effects = truck.arrive(&mut fuel, ctx).unwrap();
        assert_eq!(fuel.level(), fuel.capacity());
        assert_eq!(effects.traces.len(), 1);
        assert_eq!(
            effects.traces[0].kind,
            TraceKind::TruckArrived {
                amount: Liters::new(155)
            }
        );
        // Nobody was waiting, so the only follow-up is the station resuming
        assert_eq!(effects.events.len(), 1);
        assert!(matches!(
            effects.events[0].cmd,
            Command::Station(StationCmd::TruckDone)
        ));
    }
}
