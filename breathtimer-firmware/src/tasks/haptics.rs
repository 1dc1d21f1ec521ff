//! Haptics task
//!
//! Plays queued vibration patterns on the motor output.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use breathtimer_core::VibePattern;

use crate::channels::HAPTIC_CHANNEL;

/// Haptics task - drives the vibration motor
#[embassy_executor::task]
pub async fn haptics_task(mut motor: Output<'static>) {
    info!("Haptics task started");

    loop {
        let pattern = HAPTIC_CHANNEL.receive().await;
        debug!("Vibrate: {} ({}ms)", pattern, pattern.duration_ms());
        play(&mut motor, pattern).await;
    }
}

/// Play a pattern's alternating on/off segments, starting with on
async fn play(motor: &mut Output<'static>, pattern: VibePattern) {
    for (i, &ms) in pattern.timings_ms().iter().enumerate() {
        if i % 2 == 0 {
            motor.set_high();
        } else {
            motor.set_low();
        }
        Timer::after_millis(ms as u64).await;
    }
    motor.set_low();
}
