//! Board-agnostic core logic for the breath timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Breath-phase state machine (one `advance()` per elapsed second)
//! - Session configuration types and the built-in presets
//! - Phase-change vibration feedback lookup
//! - Display and haptic sink traits
//! - A runner that routes tick results to the sinks

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod feedback;
pub mod runner;
pub mod session;
pub mod traits;

pub use config::{ConfigError, InvalidConfiguration, PhaseDurationTable, SessionConfig};
pub use feedback::{FeedbackTable, VibePattern};
pub use runner::{SessionRunner, SinkError};
pub use session::{BreathSession, Phase, SessionState, SessionView, TickResult};
