//! Display sink trait

use crate::session::SessionView;

/// Errors that can occur while updating the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
    /// Display not initialized
    NotReady,
    /// Text did not fit the frame or buffer
    BufferOverflow,
}

/// Trait for whatever renders the session
///
/// The sink receives a full snapshot each time; it decides what to redraw.
pub trait DisplaySink {
    /// Show the current session view
    fn show(&mut self, view: &SessionView) -> Result<(), DisplayError>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn show(&mut self, view: &SessionView) -> Result<(), DisplayError> {
        (**self).show(view)
    }
}
