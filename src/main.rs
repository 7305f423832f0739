use forecourt::{
    units::{Liters, LitersPerSec, Secs},
    Config,
};

const GAS_STATION_VOLUME: Liters = Liters::new(200);
const THRESHOLD_PCT: f64 = 10.0;
const NR_PUMPS: usize = 2;
const FUEL_TANK_SIZE: Liters = Liters::new(50);
const FUEL_TANK_LEVEL: (Liters, Liters) = (Liters::new(5), Liters::new(25));
const REFUELING_SPEED: LitersPerSec = LitersPerSec::new(2);
const TANK_TRUCK_TIME: Secs = Secs::new(300);
const CHECK_EVERY: Secs = Secs::new(10);
const T_INTER: (Secs, Secs) = (Secs::new(30), Secs::new(300));
const HORIZON: Secs = Secs::new(1000);
const SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    init_logger()?;
    println!("*** Gas Station Refueling ***");
    let cfg = Config::builder()
        .reservoir_capacity(GAS_STATION_VOLUME)
        .threshold_pct(THRESHOLD_PCT)
        .nr_pumps(NR_PUMPS)
        .tank_size(FUEL_TANK_SIZE)
        .tank_level(FUEL_TANK_LEVEL)
        .refuel_speed(REFUELING_SPEED)
        .truck_transit(TANK_TRUCK_TIME)
        .poll_every(CHECK_EVERY)
        .inter_arrival(T_INTER)
        .horizon(HORIZON)
        .seed(SEED)
        .build();
    for ev in forecourt::run(cfg)? {
        println!("{ev}");
    }
    Ok(())
}

fn init_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
