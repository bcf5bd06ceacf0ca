/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::{error, info};
use std::thread::Builder;
use std::time::Duration;

/* Custom libraries */
use driver::ConsoleDriver;
use elevator::ElevatorFSM;
use shared::Snapshot;

/* Modules */
mod config;
mod driver;
mod elevator;
mod shared;

/* Main */
fn main() {
    env_logger::init();

    let matches = Command::new("liftsim")
        .about("Single-car elevator simulator driven by call buttons and motion ticks")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .get_matches();

    // Load the configuration
    let config = crate::unwrap_or_exit!(config::load_config(matches.value_of("config").unwrap()));

    // Initialize channels
    let (press_tx, press_rx) = cbc::unbounded::<u8>();
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<Snapshot>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Motion ticks at the configured cadence
    let tick_period = Duration::from_nanos(1_000_000_000 / u64::from(config.simulation.tick_rate_hz));
    let tick_rx = cbc::tick(tick_period);

    info!(
        "starting liftsim: {} floors, {} ticks/s",
        config.simulation.n_floors, config.simulation.tick_rate_hz
    );

    // Start the elevator module
    let elevator_fsm = ElevatorFSM::new(
        &config.simulation,
        press_rx,
        tick_rx,
        snapshot_tx,
        terminate_rx,
    );

    let elevator_fsm_thread = Builder::new().name("elevator_fsm".into());
    let fsm_handle = elevator_fsm_thread
        .spawn(move || elevator_fsm.run())
        .unwrap();

    // Run the console driver on the main thread
    let console_driver = ConsoleDriver::new(&config.driver, press_tx, snapshot_rx, terminate_tx);
    console_driver.run();

    let _ = fsm_handle.join();
}
