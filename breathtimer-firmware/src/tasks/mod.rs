//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod display;
pub mod haptics;
pub mod session;
pub mod tick;

pub use display::{display_task, Panel};
pub use haptics::haptics_task;
pub use session::session_task;
pub use tick::tick_task;
