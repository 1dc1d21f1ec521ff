//! Session output sinks backed by the shared channels

use breathtimer_core::session::SessionView;
use breathtimer_core::traits::{DisplayError, DisplaySink, HapticError, HapticSink};
use breathtimer_core::VibePattern;

use crate::channels::{HAPTIC_CHANNEL, SCREEN_BUFFER, SCREEN_UPDATE};

/// Writes session views into `SCREEN_BUFFER` and wakes the display task
pub struct ScreenSink;

impl DisplaySink for ScreenSink {
    fn show(&mut self, view: &SessionView) -> Result<(), DisplayError> {
        SCREEN_BUFFER.lock(|screen| screen.borrow_mut().update(view));
        SCREEN_UPDATE.signal(());
        Ok(())
    }
}

/// Queues vibration patterns for the haptics task
pub struct ChannelHaptics;

impl HapticSink for ChannelHaptics {
    fn vibrate(&mut self, pattern: VibePattern) -> Result<(), HapticError> {
        HAPTIC_CHANNEL
            .try_send(pattern)
            .map_err(|_| HapticError::Busy)
    }
}
