//! Phase-change vibration feedback
//!
//! Every phase change is announced with one of three vibration patterns,
//! chosen by a static (from -> to) lookup. Finishing the session always
//! uses the double pulse.

use heapless::Vec;

use crate::config::ConfigError;
use crate::session::Phase;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of (from -> to) feedback rules
pub const MAX_FEEDBACK_RULES: usize = 16;

/// Pattern used for transitions without an explicit rule
pub const DEFAULT_PATTERN: VibePattern = VibePattern::Short;

/// Pattern used when the session finishes
pub const FINISHED_PATTERN: VibePattern = VibePattern::Double;

/// Vibration pattern identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VibePattern {
    /// Single short pulse
    Short,
    /// Single long pulse
    Long,
    /// Two short pulses
    Double,
}

impl VibePattern {
    /// Motor timing in milliseconds
    ///
    /// Entries alternate on/off, starting with on.
    pub const fn timings_ms(self) -> &'static [u16] {
        match self {
            VibePattern::Short => &[200],
            VibePattern::Long => &[500],
            VibePattern::Double => &[200, 100, 200],
        }
    }

    /// Total pattern length in milliseconds
    pub fn duration_ms(self) -> u32 {
        self.timings_ms().iter().map(|&t| t as u32).sum()
    }
}

/// A single feedback lookup entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeedbackRule {
    /// Phase that just ended
    pub from: Phase,
    /// Phase being entered
    pub to: Phase,
    /// Pattern to play
    pub pattern: VibePattern,
}

impl FeedbackRule {
    /// Create a rule
    pub const fn new(from: Phase, to: Phase, pattern: VibePattern) -> Self {
        Self { from, to, pattern }
    }
}

/// Static (from -> to) feedback lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeedbackTable {
    rules: Vec<FeedbackRule, MAX_FEEDBACK_RULES>,
}

impl FeedbackTable {
    /// Create an empty table (every transition uses `DEFAULT_PATTERN`)
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a table from a list of rules
    ///
    /// Later rules for the same (from, to) pair replace earlier ones.
    pub fn from_rules(rules: &[FeedbackRule]) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for rule in rules {
            table.insert(rule.from, rule.to, rule.pattern)?;
        }
        Ok(table)
    }

    /// Add or replace the rule for a (from, to) pair
    pub fn insert(
        &mut self,
        from: Phase,
        to: Phase,
        pattern: VibePattern,
    ) -> Result<(), ConfigError> {
        if let Some(rule) = self
            .rules
            .iter_mut()
            .find(|r| r.from == from && r.to == to)
        {
            rule.pattern = pattern;
            return Ok(());
        }

        self.rules
            .push(FeedbackRule::new(from, to, pattern))
            .map_err(|_| ConfigError::TooManyFeedbackRules)
    }

    /// Pattern for a transition
    pub fn pattern_for(&self, from: Phase, to: Phase) -> VibePattern {
        if to.is_done() {
            return FINISHED_PATTERN;
        }

        self.rules
            .iter()
            .find(|r| r.from == from && r.to == to)
            .map(|r| r.pattern)
            .unwrap_or(DEFAULT_PATTERN)
    }

    /// All configured rules
    pub fn rules(&self) -> &[FeedbackRule] {
        &self.rules
    }

    /// Check that no rule mentions the terminal phase
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.iter().any(|r| r.from.is_done() || r.to.is_done()) {
            return Err(ConfigError::FeedbackOnDone);
        }
        Ok(())
    }
}
