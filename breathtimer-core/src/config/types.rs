//! Configuration type definitions
//!
//! A session is fully described by a (sequence, durations, total) triple
//! plus the feedback lookup. Both original watch apps are just two values
//! of `SessionConfig`.

use heapless::Vec;

use crate::feedback::FeedbackTable;
use crate::session::Phase;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum phases in one breathing cycle
pub const MAX_SEQUENCE_LEN: usize = 8;

/// Ordered, cyclic list of phases making up one breathing cycle
pub type PhaseSequence = Vec<Phase, MAX_SEQUENCE_LEN>;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The phase sequence has no entries
    EmptySequence,
    /// The phase sequence exceeds `MAX_SEQUENCE_LEN`
    SequenceTooLong,
    /// `Done` appears in the phase sequence
    DoneInSequence,
    /// A sequenced phase has no duration entry
    MissingDuration(Phase),
    /// The session budget is zero
    ZeroTotalDuration,
    /// Every sequenced phase lasts zero seconds
    NoTimedPhase,
    /// The feedback table exceeds its capacity
    TooManyFeedbackRules,
    /// A feedback rule mentions `Done`
    FeedbackOnDone,
}

/// Construction failure for a breath session
pub type InvalidConfiguration = ConfigError;

/// Phase durations in whole seconds
///
/// `None` means "no entry"; a phase with no entry may not be sequenced.
/// `Some(0)` is a skipped phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseDurationTable {
    pub breathing_in: Option<u16>,
    pub breathing_out: Option<u16>,
    pub hold_after_in: Option<u16>,
    pub hold_after_out: Option<u16>,
}

impl PhaseDurationTable {
    /// Create a table with no entries
    pub const fn new() -> Self {
        Self {
            breathing_in: None,
            breathing_out: None,
            hold_after_in: None,
            hold_after_out: None,
        }
    }

    /// Create a fully populated table
    pub const fn uniform(
        breathing_in: u16,
        breathing_out: u16,
        hold_after_in: u16,
        hold_after_out: u16,
    ) -> Self {
        Self {
            breathing_in: Some(breathing_in),
            breathing_out: Some(breathing_out),
            hold_after_in: Some(hold_after_in),
            hold_after_out: Some(hold_after_out),
        }
    }

    /// Builder-style setter
    pub const fn with(mut self, phase: Phase, seconds: u16) -> Self {
        match phase {
            Phase::BreathingIn => self.breathing_in = Some(seconds),
            Phase::BreathingOut => self.breathing_out = Some(seconds),
            Phase::HoldAfterIn => self.hold_after_in = Some(seconds),
            Phase::HoldAfterOut => self.hold_after_out = Some(seconds),
            Phase::Done => {}
        }
        self
    }

    /// Duration entry for a phase (`Done` never has one)
    pub const fn get(&self, phase: Phase) -> Option<u16> {
        match phase {
            Phase::BreathingIn => self.breathing_in,
            Phase::BreathingOut => self.breathing_out,
            Phase::HoldAfterIn => self.hold_after_in,
            Phase::HoldAfterOut => self.hold_after_out,
            Phase::Done => None,
        }
    }

    /// Set the duration for a phase (ignored for `Done`)
    pub fn set(&mut self, phase: Phase, seconds: u16) {
        *self = self.with(phase, seconds);
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Phase order for one cycle; the last entry closes the cycle
    pub sequence: PhaseSequence,
    /// Per-phase durations
    pub durations: PhaseDurationTable,
    /// Session budget in seconds
    pub total_duration_s: u32,
    /// Phase-change vibration lookup
    #[cfg_attr(feature = "serde", serde(default))]
    pub feedback: FeedbackTable,
}

impl SessionConfig {
    /// Build and validate a configuration with the default feedback table
    pub fn new(
        sequence: &[Phase],
        durations: PhaseDurationTable,
        total_duration_s: u32,
    ) -> Result<Self, ConfigError> {
        let sequence = Vec::from_slice(sequence).map_err(|_| ConfigError::SequenceTooLong)?;
        let config = Self {
            sequence,
            durations,
            total_duration_s,
            feedback: FeedbackTable::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the feedback table
    pub fn with_feedback(mut self, feedback: FeedbackTable) -> Result<Self, ConfigError> {
        feedback.validate()?;
        self.feedback = feedback;
        Ok(self)
    }

    /// Check every construction precondition
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }

        let mut any_timed = false;
        for &phase in &self.sequence {
            if phase.is_done() {
                return Err(ConfigError::DoneInSequence);
            }
            match self.durations.get(phase) {
                Some(seconds) => any_timed |= seconds > 0,
                None => return Err(ConfigError::MissingDuration(phase)),
            }
        }

        if self.total_duration_s == 0 {
            return Err(ConfigError::ZeroTotalDuration);
        }

        if !any_timed {
            return Err(ConfigError::NoTimedPhase);
        }

        self.feedback.validate()
    }

    /// Duration of a phase in seconds (0 for `Done` or missing entries)
    pub fn duration_of(&self, phase: Phase) -> u16 {
        self.durations.get(phase).unwrap_or(0)
    }

    /// Phase whose end completes a breathing cycle
    pub fn cycle_closing_phase(&self) -> Option<Phase> {
        self.sequence.last().copied()
    }

    /// Length of one full cycle in seconds
    pub fn cycle_length_s(&self) -> u32 {
        self.sequence
            .iter()
            .map(|&p| self.duration_of(p) as u32)
            .sum()
    }

    /// Number of complete cycles a session will run
    ///
    /// The session ends on the first cycle boundary at or after the budget.
    pub fn cycle_count(&self) -> u32 {
        let cycle = self.cycle_length_s();
        if cycle == 0 {
            return 0;
        }
        self.total_duration_s.div_ceil(cycle)
    }

    /// Seconds from start until the session reports `Finished`
    pub fn session_length_s(&self) -> u32 {
        self.cycle_count().saturating_mul(self.cycle_length_s())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_out(total: u32) -> Result<SessionConfig, ConfigError> {
        SessionConfig::new(
            &[Phase::BreathingIn, Phase::BreathingOut],
            PhaseDurationTable::new()
                .with(Phase::BreathingIn, 2)
                .with(Phase::BreathingOut, 2),
            total,
        )
    }

    #[test]
    fn test_valid_config() {
        let config = in_out(3).unwrap();
        assert_eq!(config.cycle_closing_phase(), Some(Phase::BreathingOut));
        assert_eq!(config.cycle_length_s(), 4);
    }

    #[test]
    fn test_empty_sequence() {
        let result = SessionConfig::new(&[], PhaseDurationTable::uniform(1, 1, 1, 1), 10);
        assert_eq!(result, Err(ConfigError::EmptySequence));
    }

    #[test]
    fn test_done_in_sequence() {
        let result = SessionConfig::new(
            &[Phase::BreathingIn, Phase::Done],
            PhaseDurationTable::uniform(1, 1, 1, 1),
            10,
        );
        assert_eq!(result, Err(ConfigError::DoneInSequence));
    }

    #[test]
    fn test_missing_duration() {
        let result = SessionConfig::new(
            &[Phase::BreathingIn, Phase::HoldAfterIn],
            PhaseDurationTable::new().with(Phase::BreathingIn, 4),
            10,
        );
        assert_eq!(
            result,
            Err(ConfigError::MissingDuration(Phase::HoldAfterIn))
        );
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(in_out(0), Err(ConfigError::ZeroTotalDuration));
    }

    #[test]
    fn test_all_zero_durations() {
        let result = SessionConfig::new(
            &[Phase::BreathingIn, Phase::BreathingOut],
            PhaseDurationTable::uniform(0, 0, 0, 0),
            10,
        );
        assert_eq!(result, Err(ConfigError::NoTimedPhase));
    }

    #[test]
    fn test_sequence_too_long() {
        let phases = [Phase::BreathingIn; MAX_SEQUENCE_LEN + 1];
        let result = SessionConfig::new(&phases, PhaseDurationTable::uniform(1, 1, 1, 1), 10);
        assert_eq!(result, Err(ConfigError::SequenceTooLong));
    }

    #[test]
    fn test_cycle_count_rounds_up() {
        // 3s budget with a 4s cycle still runs one full cycle
        let config = in_out(3).unwrap();
        assert_eq!(config.cycle_count(), 1);
        assert_eq!(config.session_length_s(), 4);

        let config = in_out(8).unwrap();
        assert_eq!(config.cycle_count(), 2);
        assert_eq!(config.session_length_s(), 8);
    }

    #[test]
    fn test_duration_table_setters() {
        let mut table = PhaseDurationTable::new();
        table.set(Phase::HoldAfterOut, 3);
        table.set(Phase::Done, 9);
        assert_eq!(table.get(Phase::HoldAfterOut), Some(3));
        assert_eq!(table.get(Phase::BreathingIn), None);
        assert_eq!(table.get(Phase::Done), None);
    }
}
