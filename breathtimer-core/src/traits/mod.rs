//! Output sink traits
//!
//! These traits define the interface between the session logic and the
//! hardware that shows and vibrates.

pub mod display;
pub mod haptics;

pub use display::{DisplayError, DisplaySink};
pub use haptics::{HapticError, HapticSink};
