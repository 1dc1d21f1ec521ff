//! Watch-face layout and rendering for the breath timer
//!
//! This crate provides:
//! - `Screen`: the three-row watch face (instruction, phase countdown,
//!   session countdown), updated from a `SessionView`
//! - `DisplayBackend` trait for anything that can draw those rows
//! - `GraphicsBackend`: a `DisplayBackend` over any monochrome
//!   `embedded-graphics` draw target
//!
//! # Architecture
//!
//! The session runner pushes views into a `Screen` (it implements the core
//! `DisplaySink`). Rendering is a separate step so the firmware can flush
//! the panel from its own task, after the tick has been processed.

#![no_std]

pub mod backend;
pub mod graphics;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use graphics::GraphicsBackend;
pub use screen::{Row, Screen, LINE_LEN, SCREEN_ROWS};
