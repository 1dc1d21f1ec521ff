//! Configuration types
//!
//! Board-agnostic session configuration. Build variants are described in
//! TOML and validated at compile time by the firmware build script.

pub mod presets;
pub mod types;

pub use types::*;
