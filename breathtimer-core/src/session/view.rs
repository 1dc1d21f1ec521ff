//! Display projection of a session

use core::fmt::Write;

use heapless::String;

use super::phase::Phase;

/// Decimal text of a seconds counter (fits any `u32`)
pub type SecondsText = String<10>;

/// What the watch face shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionView {
    /// Current phase
    pub phase: Phase,
    /// Seconds left in the phase, never negative
    pub phase_remaining_s: u16,
    /// Seconds left in the session, never negative
    pub total_remaining_s: u32,
}

impl SessionView {
    /// Instruction text ("IN", "OUT", "HOLD", "DONE")
    pub fn label(&self) -> &'static str {
        self.phase.label()
    }

    /// Phase countdown as text
    pub fn phase_remaining_text(&self) -> SecondsText {
        format_seconds(self.phase_remaining_s as u32)
    }

    /// Session countdown as text
    pub fn total_remaining_text(&self) -> SecondsText {
        format_seconds(self.total_remaining_s)
    }
}

/// Format seconds as plain decimal: no padding, no separators
pub fn format_seconds(seconds: u32) -> SecondsText {
    let mut text = String::new();
    // 10 digits always fit
    let _ = write!(text, "{}", seconds);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0).as_str(), "0");
        assert_eq!(format_seconds(7).as_str(), "7");
        assert_eq!(format_seconds(300).as_str(), "300");
        assert_eq!(format_seconds(u32::MAX).as_str(), "4294967295");
    }

    #[test]
    fn test_view_text() {
        let view = SessionView {
            phase: Phase::HoldAfterOut,
            phase_remaining_s: 1,
            total_remaining_s: 599,
        };
        assert_eq!(view.label(), "HOLD");
        assert_eq!(view.phase_remaining_text().as_str(), "1");
        assert_eq!(view.total_remaining_text().as_str(), "599");
    }
}
