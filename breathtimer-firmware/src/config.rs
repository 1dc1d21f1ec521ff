//! Compiled-in session configuration
//!
//! The tables below are generated by `build.rs` from the selected file in
//! `variants/`, after the same validation `SessionConfig::new` performs.

use breathtimer_core::config::{ConfigError, PhaseDurationTable, SessionConfig};
use breathtimer_core::feedback::{FeedbackRule, FeedbackTable};
use breathtimer_core::session::{BreathSession, Phase};
use breathtimer_core::VibePattern;

include!(concat!(env!("OUT_DIR"), "/session_variant.rs"));

/// Build the session for this firmware image
pub fn build_session() -> Result<BreathSession, ConfigError> {
    let feedback = FeedbackTable::from_rules(FEEDBACK)?;
    let config =
        SessionConfig::new(SEQUENCE, DURATIONS, TOTAL_DURATION_S)?.with_feedback(feedback)?;
    BreathSession::from_config(config)
}
