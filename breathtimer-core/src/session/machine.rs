//! Breath session state machine
//!
//! Driven by one `advance()` per elapsed second. Each call reports what
//! changed; the caller owns all rendering and vibration.

use crate::config::{ConfigError, PhaseDurationTable, SessionConfig};
use crate::feedback::{VibePattern, FINISHED_PATTERN};

use super::phase::Phase;
use super::view::SessionView;

/// Mutable session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionState {
    /// Phase currently displayed
    pub current_phase: Phase,
    /// Seconds spent in the current phase
    pub phase_elapsed_s: u16,
    /// Seconds spent in the session, saturating at `total_duration_s`
    pub total_elapsed_s: u32,
    /// Session budget in seconds
    pub total_duration_s: u32,
}

/// Outcome of one `advance()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickResult {
    /// Session already finished; nothing changed
    NoOp,
    /// Still inside the same phase
    Continuing {
        phase_remaining_s: u16,
        total_remaining_s: u32,
    },
    /// A new phase started (zero-length phases already skipped)
    PhaseChanged {
        previous_phase: Phase,
        new_phase: Phase,
        phase_remaining_s: u16,
        total_remaining_s: u32,
        pattern: VibePattern,
    },
    /// The session reached `Done`
    Finished,
}

impl TickResult {
    /// Vibration to play for this result, if any
    pub fn feedback(&self) -> Option<VibePattern> {
        match self {
            TickResult::PhaseChanged { pattern, .. } => Some(*pattern),
            TickResult::Finished => Some(FINISHED_PATTERN),
            TickResult::NoOp | TickResult::Continuing { .. } => None,
        }
    }
}

/// Breath session
///
/// Holds the configuration and the counters for one run. Construct one per
/// session and drop it when done.
#[derive(Debug, Clone)]
pub struct BreathSession {
    config: SessionConfig,
    state: SessionState,
    /// Position of `current_phase` in the sequence
    sequence_index: usize,
    /// Ticks processed, including overtime past the budget
    ticks: u32,
}

impl BreathSession {
    /// Create a session with the default feedback table
    pub fn new(
        sequence: &[Phase],
        durations: PhaseDurationTable,
        total_duration_s: u32,
    ) -> Result<Self, ConfigError> {
        Self::from_config(SessionConfig::new(sequence, durations, total_duration_s)?)
    }

    /// Create a session from a full configuration
    ///
    /// Leading zero-length phases are skipped so the first phase shown
    /// always has a countdown.
    pub fn from_config(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let first = config.sequence[0];
        let mut session = Self {
            state: SessionState {
                current_phase: first,
                phase_elapsed_s: 0,
                total_elapsed_s: 0,
                total_duration_s: config.total_duration_s,
            },
            config,
            sequence_index: 0,
            ticks: 0,
        };

        while session.current_duration() == 0 {
            session.enter(session.next_index());
        }

        Ok(session)
    }

    /// Advance the session by one second
    pub fn advance(&mut self) -> TickResult {
        if self.state.current_phase.is_done() {
            return TickResult::NoOp;
        }

        self.ticks = self.ticks.saturating_add(1);
        self.state.phase_elapsed_s = self.state.phase_elapsed_s.saturating_add(1);
        self.state.total_elapsed_s = self
            .state
            .total_elapsed_s
            .saturating_add(1)
            .min(self.state.total_duration_s);

        if self.state.phase_elapsed_s < self.current_duration() {
            return TickResult::Continuing {
                phase_remaining_s: self.phase_remaining_s(),
                total_remaining_s: self.total_remaining_s(),
            };
        }

        let previous_phase = self.state.current_phase;
        let mut hops = 0;
        loop {
            // Only a completed cycle may end the session
            if self.closes_cycle() && self.budget_spent() {
                self.state.current_phase = Phase::Done;
                return TickResult::Finished;
            }

            self.enter(self.next_index());
            hops += 1;

            if self.current_duration() > 0 || hops >= self.config.sequence.len() {
                break;
            }
        }

        let new_phase = self.state.current_phase;
        TickResult::PhaseChanged {
            previous_phase,
            new_phase,
            phase_remaining_s: self.phase_remaining_s(),
            total_remaining_s: self.total_remaining_s(),
            pattern: self.config.feedback.pattern_for(previous_phase, new_phase),
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.current_phase
    }

    /// Instruction text for the current phase
    pub fn label(&self) -> &'static str {
        self.state.current_phase.label()
    }

    /// Seconds left in the current phase (0 once done)
    pub fn phase_remaining_s(&self) -> u16 {
        if self.state.current_phase.is_done() {
            return 0;
        }
        self.current_duration()
            .saturating_sub(self.state.phase_elapsed_s)
    }

    /// Seconds left in the session budget
    pub fn total_remaining_s(&self) -> u32 {
        self.state
            .total_duration_s
            .saturating_sub(self.state.total_elapsed_s)
    }

    /// Check if the session has finished
    pub fn is_done(&self) -> bool {
        self.state.current_phase.is_done()
    }

    /// Session counters
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Ticks processed so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Snapshot for the display
    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.state.current_phase,
            phase_remaining_s: self.phase_remaining_s(),
            total_remaining_s: self.total_remaining_s(),
        }
    }

    fn current_duration(&self) -> u16 {
        self.config.duration_of(self.state.current_phase)
    }

    fn next_index(&self) -> usize {
        (self.sequence_index + 1) % self.config.sequence.len()
    }

    fn closes_cycle(&self) -> bool {
        self.sequence_index + 1 == self.config.sequence.len()
    }

    fn budget_spent(&self) -> bool {
        self.state.total_elapsed_s >= self.state.total_duration_s
    }

    fn enter(&mut self, index: usize) {
        self.sequence_index = index;
        self.state.current_phase = self.config.sequence[index];
        self.state.phase_elapsed_s = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    fn in_out(in_s: u16, out_s: u16, total: u32) -> BreathSession {
        BreathSession::new(
            &[Phase::BreathingIn, Phase::BreathingOut],
            PhaseDurationTable::new()
                .with(Phase::BreathingIn, in_s)
                .with(Phase::BreathingOut, out_s),
            total,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = in_out(7, 11, 300);
        assert_eq!(session.phase(), Phase::BreathingIn);
        assert_eq!(session.state().phase_elapsed_s, 0);
        assert_eq!(session.state().total_elapsed_s, 0);
        assert_eq!(session.phase_remaining_s(), 7);
        assert_eq!(session.total_remaining_s(), 300);
        assert_eq!(session.label(), "IN");
    }

    #[test]
    fn test_continuing() {
        let mut session = in_out(7, 11, 300);
        assert_eq!(
            session.advance(),
            TickResult::Continuing {
                phase_remaining_s: 6,
                total_remaining_s: 299,
            }
        );
    }

    #[test]
    fn test_ends_only_on_cycle_boundary() {
        let mut session = in_out(2, 2, 3);

        assert!(matches!(session.advance(), TickResult::Continuing { .. }));
        assert!(matches!(
            session.advance(),
            TickResult::PhaseChanged {
                new_phase: Phase::BreathingOut,
                phase_remaining_s: 2,
                ..
            }
        ));
        // Budget met, but the exhale is not over yet
        assert_eq!(
            session.advance(),
            TickResult::Continuing {
                phase_remaining_s: 1,
                total_remaining_s: 0,
            }
        );
        assert_eq!(session.advance(), TickResult::Finished);
        assert!(session.is_done());
        assert_eq!(session.ticks(), 4);
    }

    #[test]
    fn test_never_ends_after_inhale() {
        // Budget is spent exactly when the inhale completes
        let mut session = in_out(2, 2, 2);
        session.advance();
        let result = session.advance();
        assert!(matches!(
            result,
            TickResult::PhaseChanged {
                new_phase: Phase::BreathingOut,
                ..
            }
        ));
        assert!(!session.is_done());
    }

    #[test]
    fn test_zero_length_phase_skipped_in_same_tick() {
        let mut session = BreathSession::new(
            &[Phase::BreathingIn, Phase::HoldAfterIn, Phase::BreathingOut],
            PhaseDurationTable::uniform(2, 2, 0, 0),
            4,
        )
        .unwrap();

        session.advance();
        assert_eq!(
            session.advance(),
            TickResult::PhaseChanged {
                previous_phase: Phase::BreathingIn,
                new_phase: Phase::BreathingOut,
                phase_remaining_s: 2,
                total_remaining_s: 2,
                pattern: VibePattern::Short,
            }
        );
        assert_eq!(session.state().total_elapsed_s, 2);
    }

    #[test]
    fn test_zero_length_cycle_closer_can_finish() {
        let mut session = BreathSession::new(
            &[Phase::BreathingIn, Phase::BreathingOut, Phase::HoldAfterOut],
            PhaseDurationTable::uniform(1, 1, 0, 0),
            2,
        )
        .unwrap();

        session.advance();
        // Exhale ends, zero-length hold closes the cycle with budget spent
        assert_eq!(session.advance(), TickResult::Finished);
    }

    #[test]
    fn test_leading_zero_phase_skipped_at_start() {
        let session = BreathSession::new(
            &[Phase::HoldAfterOut, Phase::BreathingIn, Phase::BreathingOut],
            PhaseDurationTable::uniform(3, 3, 0, 0),
            10,
        )
        .unwrap();
        assert_eq!(session.phase(), Phase::BreathingIn);
        assert_eq!(session.phase_remaining_s(), 3);
    }

    #[test]
    fn test_done_is_idempotent() {
        let mut session = in_out(1, 1, 1);
        session.advance();
        assert_eq!(session.advance(), TickResult::Finished);

        let state = *session.state();
        let ticks = session.ticks();
        for _ in 0..5 {
            assert_eq!(session.advance(), TickResult::NoOp);
        }
        assert_eq!(*session.state(), state);
        assert_eq!(session.ticks(), ticks);
    }

    #[test]
    fn test_done_view_reads_zero() {
        let mut session = in_out(1, 1, 1);
        session.advance();
        session.advance();

        let view = session.view();
        assert_eq!(view.phase, Phase::Done);
        assert_eq!(view.label(), "DONE");
        assert_eq!(view.phase_remaining_s, 0);
        assert_eq!(view.total_remaining_s, 0);
    }

    #[test]
    fn test_seven_eleven_scenario() {
        let mut session = BreathSession::from_config(presets::seven_eleven().unwrap()).unwrap();

        for _ in 0..6 {
            session.advance();
        }
        assert_eq!(
            session.advance(),
            TickResult::PhaseChanged {
                previous_phase: Phase::BreathingIn,
                new_phase: Phase::BreathingOut,
                phase_remaining_s: 11,
                total_remaining_s: 293,
                pattern: VibePattern::Long,
            }
        );

        for _ in 0..10 {
            session.advance();
        }
        assert_eq!(
            session.advance(),
            TickResult::PhaseChanged {
                previous_phase: Phase::BreathingOut,
                new_phase: Phase::BreathingIn,
                phase_remaining_s: 7,
                total_remaining_s: 282,
                pattern: VibePattern::Short,
            }
        );

        let mut last = TickResult::NoOp;
        while !session.is_done() {
            last = session.advance();
        }
        assert_eq!(last, TickResult::Finished);
        assert_eq!(last.feedback(), Some(VibePattern::Double));
        assert_eq!(session.ticks(), 306);
        assert_eq!(session.state().total_elapsed_s, 300);
    }

    #[test]
    fn test_paced_hold_cycle() {
        let mut session = BreathSession::from_config(presets::paced_hold().unwrap()).unwrap();
        let mut changes = [Phase::Done; 3];
        let mut patterns = [VibePattern::Double; 3];
        let mut n = 0;

        while n < 3 {
            if let TickResult::PhaseChanged {
                new_phase, pattern, ..
            } = session.advance()
            {
                changes[n] = new_phase;
                patterns[n] = pattern;
                n += 1;
            }
        }

        assert_eq!(
            changes,
            [Phase::BreathingOut, Phase::HoldAfterOut, Phase::BreathingIn]
        );
        assert_eq!(
            patterns,
            [VibePattern::Short, VibePattern::Short, VibePattern::Long]
        );
        assert_eq!(session.ticks(), 5);
    }

    #[test]
    fn test_feedback_mapping() {
        assert_eq!(TickResult::NoOp.feedback(), None);
        assert_eq!(
            TickResult::Continuing {
                phase_remaining_s: 1,
                total_remaining_s: 1,
            }
            .feedback(),
            None
        );
        assert_eq!(TickResult::Finished.feedback(), Some(VibePattern::Double));
    }

    #[test]
    fn test_invalid_configuration() {
        let result = BreathSession::new(&[], PhaseDurationTable::uniform(1, 1, 1, 1), 10);
        assert!(matches!(result, Err(ConfigError::EmptySequence)));
    }
}
