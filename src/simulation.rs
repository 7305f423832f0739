pub(crate) mod event;
mod schedule;

use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

use crate::{
    container::Container,
    entities::{
        car::{Car, CarCmd, CarId},
        generator::{CarGenerator, GeneratorCmd},
        station::{Station, StationCmd},
        truck::{TankTruck, TruckCmd},
    },
    error::Error,
    resource::Resource,
    time::{Delta, Time},
    trace::{TraceEvent, TraceKind, TraceList},
    units::LitersPerSec,
};

use self::{
    event::{Event, EventList},
    schedule::Schedule,
};

#[derive(Debug, typed_builder::TypedBuilder)]
pub(crate) struct Simulation {
    // Run-time
    #[builder(default, setter(skip))]
    cur_time: Time,
    #[builder(default, setter(skip))]
    schedule: Schedule,
    #[builder(default, setter(skip))]
    traces: Vec<TraceEvent>,

    // Entities
    station: Station,
    generator: CarGenerator,
    truck: TankTruck,
    #[builder(default, setter(skip))]
    cars: FxHashMap<CarId, Car>,

    // Shared stores, mutated only by the entity running at the current instant
    pumps: Resource<Command>,
    fuel: Container<Command>,

    // Global configuration
    refuel_speed: LitersPerSec,
    rng: ChaCha8Rng,

    // Run horizon
    until: Time,
}

impl Simulation {
    pub(crate) fn run(mut self) -> Result<Vec<TraceEvent>, Error> {
        // Kick off the control loop and the arrival stream
        self.schedule
            .push(Event::new(Time::ZERO, StationCmd::new_poll()));
        self.schedule
            .push(Event::new(Time::ZERO, GeneratorCmd::new_step()));
        while !self.should_stop() {
            self.step()?;
        }
        Ok(self.finish())
    }

    fn step(&mut self) -> Result<(), Error> {
        let next = self.schedule.pop().expect("checked by should_stop");

        let (time, cmd) = (next.time(), next.cmd);
        if time < self.cur_time {
            return Err(Error::TimeInversion {
                time,
                now: self.cur_time,
            });
        }
        self.cur_time = time;
        log::debug!("t={time}ms: {cmd:?}");

        let effects = self.apply(cmd)?;
        for ev in effects.events.into_iter() {
            self.schedule.push(ev);
        }
        self.traces.extend(effects.traces);
        Ok(())
    }

    fn should_stop(&self) -> bool {
        match self.schedule.next_due() {
            Some(due) => due > self.until,
            None => true,
        }
    }

    fn context(&self) -> Context {
        Context::new(self.cur_time, self.refuel_speed)
    }

    fn finish(self) -> Vec<TraceEvent> {
        self.traces
    }
}

// Command handlers
impl Simulation {
    fn apply(&mut self, cmd: Command) -> Result<Effects, Error> {
        match cmd {
            Command::Station(cmd) => Ok(self.apply_station(cmd)),
            Command::Truck(cmd) => self.apply_truck(cmd),
            Command::Generator(cmd) => Ok(self.apply_generator(cmd)),
            Command::Car(cmd) => self.apply_car(cmd),
        }
    }

    fn apply_station(&mut self, cmd: StationCmd) -> Effects {
        let ctx = self.context();
        match cmd {
            StationCmd::Poll => self.station.poll(&self.fuel, ctx),
            StationCmd::TruckDone => self.station.truck_done(ctx),
        }
    }

    fn apply_truck(&mut self, cmd: TruckCmd) -> Result<Effects, Error> {
        let ctx = self.context();
        match cmd {
            TruckCmd::Arrive => self.truck.arrive(&mut self.fuel, ctx),
        }
    }

    fn apply_generator(&mut self, cmd: GeneratorCmd) -> Effects {
        let ctx = self.context();
        match cmd {
            GeneratorCmd::Step => {
                let (car, effects) = self.generator.step(&mut self.rng, ctx);
                self.cars.insert(car.id, car);
                effects
            }
        }
    }

    fn apply_car(&mut self, cmd: CarCmd) -> Result<Effects, Error> {
        let ctx = self.context();
        match cmd {
            CarCmd::Arrive { id } => {
                let car = self.cars.get_mut(&id).expect("invalid car ID");
                Ok(car.arrive(&mut self.pumps, ctx))
            }
            CarCmd::PumpGranted { id } => {
                let car = self.cars.get_mut(&id).expect("invalid car ID");
                car.pump_granted(&mut self.fuel, ctx)
            }
            CarCmd::FuelGranted { id } => {
                let car = self.cars.get_mut(&id).expect("invalid car ID");
                Ok(car.fuel_granted(ctx))
            }
            CarCmd::Done { id } => {
                // The car runs to completion here and its state is dropped
                let car = self.cars.remove(&id).expect("invalid car ID");
                let effects = car.done(&mut self.pumps, ctx);
                log::debug!("{} of the pumps held after car {id} left", self.pumps.held());
                Ok(effects)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, derive_more::From)]
pub(crate) enum Command {
    Station(StationCmd),
    Truck(TruckCmd),
    Generator(GeneratorCmd),
    Car(CarCmd),
}

/// Everything a handler produced while running: follow-up events and
/// observable trace records.
#[derive(Debug, Default)]
pub(crate) struct Effects {
    pub(crate) events: EventList,
    pub(crate) traces: TraceList,
}

#[derive(Debug)]
pub(crate) struct Context {
    pub(crate) cur_time: Time,
    effects: Effects,

    // Configuration
    pub(crate) refuel_speed: LitersPerSec,
}

impl Context {
    pub(crate) fn new(cur_time: Time, refuel_speed: LitersPerSec) -> Self {
        Self {
            cur_time,
            effects: Effects::default(),
            refuel_speed,
        }
    }

    pub(crate) fn schedule(&mut self, delta: Delta, cmd: impl Into<Command>) {
        let time = self.cur_time + delta;
        self.effects.events.push(Event::new(time, cmd.into()));
    }

    pub(crate) fn schedule_now(&mut self, cmd: impl Into<Command>) {
        self.schedule(Delta::ZERO, cmd);
    }

    pub(crate) fn trace(&mut self, kind: TraceKind) {
        self.effects.traces.push(TraceEvent {
            time: self.cur_time,
            kind,
        });
    }

    pub(crate) fn into_effects(self) -> Effects {
        self.effects
    }
}
