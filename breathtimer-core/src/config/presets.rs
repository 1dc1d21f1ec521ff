//! Built-in session presets
//!
//! The two shipped watch apps, expressed as configurations of the same
//! machine. The firmware normally compiles one of these in through the
//! TOML files under `breathtimer-firmware/variants/`.

use crate::feedback::{FeedbackRule, FeedbackTable, VibePattern};
use crate::session::Phase;

use super::types::{ConfigError, PhaseDurationTable, SessionConfig};

/// 7s in, 11s out for five minutes
///
/// Holds are configured but not sequenced.
pub fn seven_eleven() -> Result<SessionConfig, ConfigError> {
    let feedback = FeedbackTable::from_rules(&[
        FeedbackRule::new(Phase::BreathingIn, Phase::BreathingOut, VibePattern::Long),
        FeedbackRule::new(Phase::BreathingOut, Phase::BreathingIn, VibePattern::Short),
    ])?;

    SessionConfig::new(
        &[Phase::BreathingIn, Phase::BreathingOut],
        PhaseDurationTable::uniform(7, 11, 0, 0),
        300,
    )?
    .with_feedback(feedback)
}

/// 2s in, 2s out, 1s hold for ten minutes
pub fn paced_hold() -> Result<SessionConfig, ConfigError> {
    let feedback = FeedbackTable::from_rules(&[
        FeedbackRule::new(Phase::BreathingIn, Phase::BreathingOut, VibePattern::Short),
        FeedbackRule::new(Phase::BreathingOut, Phase::HoldAfterOut, VibePattern::Short),
        FeedbackRule::new(Phase::HoldAfterOut, Phase::BreathingIn, VibePattern::Long),
    ])?;

    SessionConfig::new(
        &[Phase::BreathingIn, Phase::BreathingOut, Phase::HoldAfterOut],
        PhaseDurationTable::uniform(2, 2, 1, 1),
        600,
    )?
    .with_feedback(feedback)
}
