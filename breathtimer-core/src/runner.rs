//! Session runner
//!
//! Owns a session plus its display and haptic sinks. The host calls
//! `tick()` once per second; the runner advances the session and pushes
//! the result to both sinks.

use crate::session::{BreathSession, TickResult};
use crate::traits::{DisplayError, DisplaySink, HapticError, HapticSink};

/// Errors reported by the output sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// Display update failed
    Display(DisplayError),
    /// Vibration request failed
    Haptic(HapticError),
}

impl From<DisplayError> for SinkError {
    fn from(e: DisplayError) -> Self {
        SinkError::Display(e)
    }
}

impl From<HapticError> for SinkError {
    fn from(e: HapticError) -> Self {
        SinkError::Haptic(e)
    }
}

/// Drives one session against a display and a vibration motor
pub struct SessionRunner<D, H> {
    session: BreathSession,
    display: D,
    haptics: H,
}

impl<D: DisplaySink, H: HapticSink> SessionRunner<D, H> {
    /// Create a runner
    pub fn new(session: BreathSession, display: D, haptics: H) -> Self {
        Self {
            session,
            display,
            haptics,
        }
    }

    /// Show the initial screen (first phase, full countdowns)
    pub fn start(&mut self) -> Result<(), SinkError> {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "Session start: {} for {}s",
            self.session.phase(),
            self.session.state().total_duration_s
        );

        self.display.show(&self.session.view())?;
        Ok(())
    }

    /// Process one elapsed second
    ///
    /// The session always advances. A display failure does not suppress
    /// the vibration; the first sink error is returned.
    pub fn tick(&mut self) -> Result<TickResult, SinkError> {
        let result = self.session.advance();
        if result == TickResult::NoOp {
            return Ok(result);
        }

        #[cfg(feature = "defmt")]
        match result {
            TickResult::PhaseChanged {
                previous_phase,
                new_phase,
                pattern,
                ..
            } => defmt::debug!("Phase {} -> {} ({})", previous_phase, new_phase, pattern),
            TickResult::Finished => {
                defmt::info!("Session finished after {} ticks", self.session.ticks())
            }
            _ => {}
        }

        let shown = self.display.show(&self.session.view());
        let felt = match result.feedback() {
            Some(pattern) => self.haptics.vibrate(pattern),
            None => Ok(()),
        };

        shown?;
        felt?;
        Ok(result)
    }

    /// The session being run
    pub fn session(&self) -> &BreathSession {
        &self.session
    }

    /// Check if the session has finished
    pub fn is_done(&self) -> bool {
        self.session.is_done()
    }

    /// Take back the session and sinks
    pub fn into_parts(self) -> (BreathSession, D, H) {
        (self.session, self.display, self.haptics)
    }
}
