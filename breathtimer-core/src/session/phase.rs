//! Breathing phases

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One stage of a breathing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// Inhale
    BreathingIn,
    /// Exhale
    BreathingOut,
    /// Hold with full lungs
    HoldAfterIn,
    /// Hold with empty lungs
    HoldAfterOut,
    /// Session finished; terminal
    Done,
}

impl Phase {
    /// Every phase that can appear in a sequence
    pub const TIMED: [Phase; 4] = [
        Phase::BreathingIn,
        Phase::BreathingOut,
        Phase::HoldAfterIn,
        Phase::HoldAfterOut,
    ];

    /// Instruction text shown on the watch face
    pub const fn label(self) -> &'static str {
        match self {
            Phase::BreathingIn => "IN",
            Phase::BreathingOut => "OUT",
            Phase::HoldAfterIn | Phase::HoldAfterOut => "HOLD",
            Phase::Done => "DONE",
        }
    }

    /// Check if this is the terminal phase
    pub const fn is_done(self) -> bool {
        matches!(self, Phase::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Phase::BreathingIn.label(), "IN");
        assert_eq!(Phase::BreathingOut.label(), "OUT");
        assert_eq!(Phase::HoldAfterIn.label(), "HOLD");
        assert_eq!(Phase::HoldAfterOut.label(), "HOLD");
        assert_eq!(Phase::Done.label(), "DONE");
    }

    #[test]
    fn test_timed_excludes_done() {
        assert!(!Phase::TIMED.contains(&Phase::Done));
        assert!(Phase::TIMED.iter().all(|p| !p.is_done()));
    }
}
