use rand::Rng;

use crate::{
    simulation::{Context, Effects},
    units::{Liters, Secs},
};

use super::car::{Car, CarCmd, CarId};

/// Feeds the simulation with randomly arriving cars. Each step draws one
/// inter-arrival delay and one tank level, registers the next car under a
/// fresh ID, and re-schedules itself for that car's arrival instant; it
/// never blocks on the cars it creates.
#[derive(Debug, typed_builder::TypedBuilder)]
pub(crate) struct CarGenerator {
    inter_arrival: (Secs, Secs),
    tank_size: Liters,
    tank_level: (Liters, Liters),

    #[builder(default = CarId::ONE, setter(skip))]
    next_id: CarId,
}

impl CarGenerator {
    #[must_use]
    pub(crate) fn step(&mut self, rng: &mut impl Rng, mut ctx: Context) -> (Car, Effects) {
        let (lo, hi) = self.inter_arrival;
        let delay = Secs::new(rng.gen_range(lo.into_u64()..=hi.into_u64())).into_delta();
        let (lo, hi) = self.tank_level;
        let tank_level = Liters::new(rng.gen_range(lo.into_u64()..=hi.into_u64()));

        let car = Car::builder()
            .id(self.next_id)
            .tank_size(self.tank_size)
            .tank_level(tank_level)
            .build();
        self.next_id += CarId::ONE;

        ctx.schedule(delay, CarCmd::new_arrive(car.id));
        ctx.schedule(delay, GeneratorCmd::new_step());
        (car, ctx.into_effects())
    }
}

#[derive(Debug, Copy, Clone, derive_new::new)]
pub(crate) enum GeneratorCmd {
    Step,
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{simulation::Command, time::Time, units::LitersPerSec};

    #[test]
    fn degenerate_ranges_make_the_stream_deterministic() {
        let mut generator = CarGenerator::builder()
            .inter_arrival((Secs::new(30), Secs::new(30)))
            .tank_size(Liters::new(50))
            .tank_level((Liters::new(5), Liters::new(5)))
            .build();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let ctx = Context::new(Time::ZERO, LitersPerSec::new(2));
        let (car, effects) = generator.step(&mut rng, ctx);
        assert_eq!(car.id, CarId::ONE);
        assert_eq!(effects.events.len(), 2);
        for ev in &effects.events {
            assert_eq!(ev.time(), Secs::new(30).into_time());
        }
        assert!(matches!(
            effects.events[0].cmd,
            Command::Car(CarCmd::Arrive { id }) if id == CarId::ONE
        ));
        assert!(matches!(
            effects.events[1].cmd,
            Command::Generator(GeneratorCmd::Step)
        ));

        let ctx = Context::new(Secs::new(30).into_time(), LitersPerSec::new(2));
        let (car, _) = generator.step(&mut rng, ctx);
        assert_eq!(car.id, CarId::new(2));
    }
}
