//! Haptic sink trait

use crate::feedback::VibePattern;

/// Errors that can occur while requesting a vibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HapticError {
    /// A previous pattern is still queued
    Busy,
    /// Motor driver fault
    Driver,
}

/// Trait for the vibration motor
///
/// Implementations should return quickly; playing the pattern may happen
/// asynchronously.
pub trait HapticSink {
    /// Start playing a pattern
    fn vibrate(&mut self, pattern: VibePattern) -> Result<(), HapticError>;
}

impl<T: HapticSink + ?Sized> HapticSink for &mut T {
    fn vibrate(&mut self, pattern: VibePattern) -> Result<(), HapticError> {
        (**self).vibrate(pattern)
    }
}
