//! Conveyor - Transfer Station Controller Firmware
//!
//! Main firmware binary for the RP2350B transfer station board. Two belt
//! motors follow their gate signals at a speed chosen by proximity
//! sensors; a solenoid follows its own gate.

#![no_std]
#![no_main]

use conveyor_core::supervisor::{keep_alive, WATCHDOG_TIMEOUT_MS};
use conveyor_core::SpeedStore;
use conveyor_hal_rp2350::{EmbassyClock, FlashNvm, RpWatchdog};
use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use embassy_rp::block::ImageDef;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::board::{Hardware, Inputs};

mod board;
mod config;
mod tasks;

/// Boot ROM image definition
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Input lines are shared by reference between controller tasks
static INPUTS: StaticCell<Inputs> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Conveyor firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let deployment = config::deployment();
    unwrap!(deployment.check(&board::BOARD));

    // All actuators are parked (duty 0 / low) from here on
    let Hardware {
        inputs,
        mut motors,
        mut solenoids,
        flash,
        watchdog,
    } = unwrap!(Hardware::new(p));
    let inputs: &'static Inputs = INPUTS.init(inputs);
    inputs.log_levels();

    let mut store = SpeedStore::new(FlashNvm::new(flash));
    config::apply_bench_calibration(&mut store).await;
    let profile = config::load_profile(&mut store).await;

    let timing = deployment.timing();

    // Flash work is done; from here a stalled or panicked executor resets
    // the chip, which releases every actuator line
    let mut watchdog = RpWatchdog::start(watchdog, WATCHDOG_TIMEOUT_MS);
    info!("Watchdog started ({}ms)", WATCHDOG_TIMEOUT_MS);

    for binding in deployment.motors() {
        let controller = unwrap!(board::motor_controller(
            inputs,
            &mut motors,
            binding,
            profile,
            timing
        ));
        info!(
            "{}: gate={}, stop={}, low={}",
            binding.motor, binding.gate, binding.stop_sensor, binding.low_sensor
        );
        spawner
            .spawn(tasks::motor_task(binding.motor, controller))
            .unwrap();
    }

    for binding in deployment.solenoids() {
        let controller = unwrap!(board::solenoid_controller(
            inputs,
            &mut solenoids,
            binding,
            timing
        ));
        info!("{}: gate={}", binding.solenoid, binding.gate);
        spawner
            .spawn(tasks::solenoid_task(binding.solenoid, controller))
            .unwrap();
    }

    for name in motors.unbound().chain(solenoids.unbound()) {
        info!("{}: unbound, held off", name);
    }

    info!("All tasks spawned, firmware running");

    // Unbound actuators stay owned (and off) for as long as this loops
    keep_alive(&mut watchdog, &EmbassyClock, &mut Delay, |uptime_ms| {
        trace!("Main loop heartbeat ({}s)", uptime_ms / 1000);
    })
    .await;
}
