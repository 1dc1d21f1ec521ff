//! Breath session state machine
//!
//! Walks a fixed, cyclic phase sequence one second at a time and ends the
//! session on the first cycle boundary after the time budget is spent.
//! The machine is explicit, finite, and deterministic.

pub mod machine;
pub mod phase;
pub mod view;

pub use machine::{BreathSession, SessionState, TickResult};
pub use phase::Phase;
pub use view::{format_seconds, SecondsText, SessionView};
