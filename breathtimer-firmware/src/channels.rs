//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use breathtimer_core::VibePattern;
use breathtimer_display::Screen;

/// Channel capacity for one-second ticks
///
/// Ticks queue up rather than overwrite so a slow display flush never
/// costs the session a second.
const TICK_CHANNEL_SIZE: usize = 4;

/// Channel capacity for vibration requests
const HAPTIC_CHANNEL_SIZE: usize = 4;

/// One-second ticks from the tick task (value is the tick number)
pub static TICK_CHANNEL: Channel<CriticalSectionRawMutex, u32, TICK_CHANNEL_SIZE> =
    Channel::new();

/// Vibration patterns to play, in order
pub static HAPTIC_CHANNEL: Channel<CriticalSectionRawMutex, VibePattern, HAPTIC_CHANNEL_SIZE> =
    Channel::new();

/// Signal that the screen buffer changed and should be drawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that the session reached Done (stops the tick task)
pub static SESSION_DONE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Shared screen buffer, written by the session task and drawn by the
/// display task
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, RefCell<Screen>> =
    Mutex::new(RefCell::new(Screen::new()));
