//! Session task
//!
//! Owns the breathing session and drives it from the tick channel.

use defmt::*;

use breathtimer_core::{BreathSession, SessionRunner, TickResult};

use crate::channels::{SESSION_DONE, TICK_CHANNEL};
use crate::sinks::{ChannelHaptics, ScreenSink};

/// Session task - advances the session once per received tick
#[embassy_executor::task]
pub async fn session_task(session: BreathSession) {
    info!("Session task started");

    let mut runner = SessionRunner::new(session, ScreenSink, ChannelHaptics);
    if let Err(e) = runner.start() {
        warn!("Initial screen update failed: {:?}", e);
    }

    while !runner.is_done() {
        let tick = TICK_CHANNEL.receive().await;

        match runner.tick() {
            Ok(TickResult::PhaseChanged { new_phase, .. }) => {
                debug!("Tick {}: entered {}", tick, new_phase);
            }
            Ok(TickResult::Finished) => {
                info!("Tick {}: session complete", tick);
            }
            Ok(result) => trace!("Tick {}: {:?}", tick, result),
            Err(e) => warn!("Tick {}: output failed: {:?}", tick, e),
        }
    }

    SESSION_DONE.signal(());
    info!(
        "Session task finished, {}s elapsed",
        runner.session().state().total_elapsed_s
    );
}
