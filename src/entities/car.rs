use crate::{
    container::Container,
    error::Error,
    resource::Resource,
    simulation::{Command, Context, Effects},
    time::Time,
    trace::TraceKind,
    units::Liters,
};

entity_id!(CarId);

/// A car moving through the station: it arrives, acquires a pump, withdraws
/// the fuel its tank is missing, refuels for the physical transfer time, and
/// leaves. Each handler is one transition of that sequence.
#[derive(Debug, typed_builder::TypedBuilder)]
pub(crate) struct Car {
    pub(crate) id: CarId,
    tank_size: Liters,
    tank_level: Liters,

    #[builder(default, setter(skip))]
    arrived: Time,
}

impl Car {
    fn required(&self) -> Liters {
        self.tank_size - self.tank_level
    }

    #[must_use]
    pub(crate) fn arrive(&mut self, pumps: &mut Resource<Command>, mut ctx: Context) -> Effects {
        self.arrived = ctx.cur_time;
        ctx.trace(TraceKind::CarArrived { car: self.id });
        // An immediate grant is re-scheduled for the current instant so the
        // car resumes through the same path whether or not it had to wait
        if let Some(waiter) = pumps.acquire(CarCmd::new_pump_granted(self.id).into()) {
            ctx.schedule_now(waiter);
        }
        ctx.into_effects()
    }

    pub(crate) fn pump_granted(
        &mut self,
        fuel: &mut Container<Command>,
        mut ctx: Context,
    ) -> Result<Effects, Error> {
        let waiter = CarCmd::new_fuel_granted(self.id).into();
        if let Some(waiter) = fuel.get(self.required(), waiter)? {
            ctx.schedule_now(waiter);
        }
        Ok(ctx.into_effects())
    }

    #[must_use]
    pub(crate) fn fuel_granted(&mut self, mut ctx: Context) -> Effects {
        let transfer = ctx.refuel_speed.length(self.required()).into_delta();
        ctx.schedule(transfer, CarCmd::new_done(self.id));
        ctx.into_effects()
    }

    /// Final transition; the pump is released here and nowhere else.
    #[must_use]
    pub(crate) fn done(self, pumps: &mut Resource<Command>, mut ctx: Context) -> Effects {
        ctx.trace(TraceKind::CarRefueled {
            car: self.id,
            elapsed: ctx.cur_time - self.arrived,
        });
        if let Some(waiter) = pumps.release() {
            ctx.schedule_now(waiter);
        }
        ctx.into_effects()
    }
}

#[derive(Debug, Copy, Clone, derive_new::new)]
pub(crate) enum CarCmd {
    Arrive { id: CarId },
    PumpGranted { id: CarId },
    FuelGranted { id: CarId },
    Done { id: CarId },
}
