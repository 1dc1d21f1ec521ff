//! Display backend trait
//!
//! Defines the interface for different display types.

pub use breathtimer_core::traits::DisplayError;

use crate::screen::Row;

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing the watch face.
/// Each row is an independent horizontal band; implementations decide
/// fonts and pixel placement.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Blank a single row
    fn clear_row(&mut self, row: Row) -> Result<(), DisplayError>;

    /// Draw text centered in a row
    fn draw_row(&mut self, row: Row, text: &str) -> Result<(), DisplayError>;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
