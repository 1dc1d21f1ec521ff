//! Tick task for the one-second session clock
//!
//! Sends one tick per second to the session task until the session
//! reports it is done.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use crate::channels::{SESSION_DONE, TICK_CHANNEL};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - sends numbered ticks once per second
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut count: u32 = 0;

    loop {
        match select(ticker.next(), SESSION_DONE.wait()).await {
            Either::First(()) => {
                count = count.wrapping_add(1);
                // Waits if the session task falls behind; no tick is lost
                let sent = select(TICK_CHANNEL.send(count), SESSION_DONE.wait()).await;
                if let Either::Second(()) = sent {
                    break;
                }
            }
            Either::Second(()) => break,
        }
    }

    info!("Tick task stopped after {} ticks", count);
}
