use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    container::Container,
    entities::{generator::CarGenerator, station::Station, truck::TankTruck},
    error::Error,
    resource::Resource,
    simulation::Simulation,
    trace::TraceEvent,
    units::{Liters, LitersPerSec, Secs},
};

/// A scenario configuration. Every quantity must be positive and every
/// `[min, max]` range non-inverted; [`run`] validates before starting.
#[derive(
    Debug, Clone, Copy, typed_builder::TypedBuilder, serde::Serialize, serde::Deserialize,
)]
pub struct Config {
    /// Reservoir capacity, in liters. The reservoir starts full.
    pub reservoir_capacity: Liters,
    /// Reservoir percentage below which the tank truck is called.
    pub threshold_pct: f64,
    /// Number of fuel pumps.
    pub nr_pumps: usize,
    /// Fuel tank size of a car, in liters.
    pub tank_size: Liters,
    /// Min/max fuel level of an arriving car's tank, in liters.
    pub tank_level: (Liters, Liters),
    /// Fuel transfer speed at the pumps.
    pub refuel_speed: LitersPerSec,
    /// Travel time of the tank truck.
    pub truck_transit: Secs,
    /// Interval between reservoir level checks.
    pub poll_every: Secs,
    /// Min/max delay between car arrivals.
    pub inter_arrival: (Secs, Secs),
    /// Run horizon; events due later than this never run.
    pub horizon: Secs,
    /// RNG seed. Runs with equal configuration and seed are identical.
    pub seed: u64,
}

impl Config {
    fn validate(&self) -> Result<(), Error> {
        fn ensure(cond: bool, msg: &str) -> Result<(), Error> {
            cond.then_some(()).ok_or_else(|| Error::Config(msg.into()))
        }
        ensure(
            self.reservoir_capacity > Liters::ZERO,
            "reservoir capacity must be positive",
        )?;
        ensure(self.threshold_pct > 0.0, "dispatch threshold must be positive")?;
        ensure(self.nr_pumps > 0, "pump count must be positive")?;
        ensure(self.tank_size > Liters::ZERO, "tank size must be positive")?;
        ensure(
            self.tank_level.0 > Liters::ZERO,
            "tank level minimum must be positive",
        )?;
        ensure(
            self.tank_level.0 <= self.tank_level.1,
            "tank level range is inverted",
        )?;
        ensure(
            self.tank_level.1 <= self.tank_size,
            "tank level range exceeds the tank size",
        )?;
        ensure(
            self.refuel_speed > LitersPerSec::ZERO,
            "refueling speed must be positive",
        )?;
        ensure(
            self.truck_transit > Secs::ZERO,
            "truck transit time must be positive",
        )?;
        ensure(self.poll_every > Secs::ZERO, "poll interval must be positive")?;
        ensure(
            self.inter_arrival.0 > Secs::ZERO,
            "inter-arrival minimum must be positive",
        )?;
        ensure(
            self.inter_arrival.0 <= self.inter_arrival.1,
            "inter-arrival range is inverted",
        )?;
        ensure(self.horizon > Secs::ZERO, "run horizon must be positive")?;
        Ok(())
    }
}

/// Runs the scenario to its horizon and returns the trace of observable
/// events in occurrence order.
pub fn run(cfg: Config) -> Result<Vec<TraceEvent>, Error> {
    cfg.validate()?;
    log::info!(
        "running to a horizon of {}s with seed {}",
        cfg.horizon,
        cfg.seed
    );
    let station = Station::builder()
        .threshold_pct(cfg.threshold_pct)
        .poll_every(cfg.poll_every.into_delta())
        .truck_transit(cfg.truck_transit.into_delta())
        .build();
    let generator = CarGenerator::builder()
        .inter_arrival(cfg.inter_arrival)
        .tank_size(cfg.tank_size)
        .tank_level(cfg.tank_level)
        .build();
    let sim = Simulation::builder()
        .station(station)
        .generator(generator)
        .truck(TankTruck::new())
        .pumps(Resource::new(cfg.nr_pumps))
        .fuel(Container::new(cfg.reservoir_capacity, cfg.reservoir_capacity))
        .refuel_speed(cfg.refuel_speed)
        .rng(ChaCha8Rng::seed_from_u64(cfg.seed))
        .until(cfg.horizon.into_time())
        .build();
    sim.run()
}

pub fn read_config(path: impl AsRef<Path>) -> Result<Config, Error> {
    let s = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cfg() -> Config {
        Config::builder()
            .reservoir_capacity(Liters::new(200))
            .threshold_pct(10.0)
            .nr_pumps(2)
            .tank_size(Liters::new(50))
            .tank_level((Liters::new(5), Liters::new(25)))
            .refuel_speed(LitersPerSec::new(2))
            .truck_transit(Secs::new(300))
            .poll_every(Secs::new(10))
            .inter_arrival((Secs::new(30), Secs::new(300)))
            .horizon(Secs::new(1000))
            .seed(42)
            .build()
    }

    #[test]
    fn rejects_zero_pumps() {
        let mut cfg = base_cfg();
        cfg.nr_pumps = 0;
        assert!(matches!(run(cfg), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_inverted_inter_arrival_range() {
        let mut cfg = base_cfg();
        cfg.inter_arrival = (Secs::new(300), Secs::new(30));
        assert!(matches!(run(cfg), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_tank_level_above_tank_size() {
        let mut cfg = base_cfg();
        cfg.tank_level = (Liters::new(5), Liters::new(60));
        assert!(matches!(run(cfg), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_zero_threshold() {
        let mut cfg = base_cfg();
        cfg.threshold_pct = 0.0;
        assert!(matches!(run(cfg), Err(Error::Config(_))));
    }

    #[test]
    fn config_round_trips_through_json() {
        let json = serde_json::to_string(&base_cfg()).unwrap();
        let cfg: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.reservoir_capacity, Liters::new(200));
        assert_eq!(cfg.inter_arrival, (Secs::new(30), Secs::new(300)));
        assert_eq!(cfg.seed, 42);
    }
}
