//! Breath Timer - guided breathing firmware
//!
//! Runs one breathing session on an RP2040 wearable: a 128x64 SH1106 OLED
//! shows the instruction and both countdowns, and a vibration motor marks
//! every phase change. The session itself is chosen at build time from
//! `variants/`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod config;
mod sh1106;
mod sinks;
mod tasks;

use crate::sh1106::Sh1106;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Breath Timer firmware starting ({})", config::VARIANT);

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let session = match config::build_session() {
        Ok(session) => session,
        Err(e) => {
            // build.rs validates the variant, so this only trips if the
            // generated tables and the core checks disagree
            error!("Invalid session configuration: {:?}", e);
            core::future::pending::<()>().await;
            return;
        }
    };
    info!(
        "Session: {} cycles, ends after {}s",
        session.config().cycle_count(),
        session.config().session_length_s()
    );

    // OLED on I2C0 (GPIO5 SCL, GPIO4 SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);
    let panel = Sh1106::new(i2c);

    // Vibration motor driver gate
    let motor = Output::new(p.PIN_15, Level::Low);

    // Spawn tasks
    spawner.spawn(tasks::display_task(panel)).unwrap();
    spawner.spawn(tasks::haptics_task(motor)).unwrap();
    spawner.spawn(tasks::session_task(session)).unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
