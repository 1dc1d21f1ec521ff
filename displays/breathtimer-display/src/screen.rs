//! Screen buffer for the watch face
//!
//! Three stacked rows: the breathing instruction, the seconds left in the
//! current phase, and the seconds left in the session.

use heapless::String;

use breathtimer_core::session::SessionView;
use breathtimer_core::traits::{DisplayError, DisplaySink};

use crate::backend::DisplayBackend;

/// Number of rows on the watch face
pub const SCREEN_ROWS: usize = 3;

/// Maximum characters per row
pub const LINE_LEN: usize = 12;

/// Watch-face rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    /// "IN" / "OUT" / "HOLD" / "DONE"
    Instruction,
    /// Seconds left in the current phase
    PhaseTimer,
    /// Seconds left in the session
    TotalTimer,
}

impl Row {
    /// All rows in drawing order
    pub const ALL: [Row; SCREEN_ROWS] = [Row::Instruction, Row::PhaseTimer, Row::TotalTimer];

    /// Row position, 0 at the top
    pub const fn index(self) -> usize {
        match self {
            Row::Instruction => 0,
            Row::PhaseTimer => 1,
            Row::TotalTimer => 2,
        }
    }
}

/// Screen buffer
///
/// Tracks which rows changed since the last render so the panel only
/// redraws what moved (usually just the two countdowns).
#[derive(Clone)]
pub struct Screen {
    /// Current row content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Rows changed since the last render
    dirty: [bool; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new(), String::new()],
            dirty: [true; SCREEN_ROWS],
        }
    }

    /// Load a session snapshot
    pub fn update(&mut self, view: &SessionView) {
        self.set_line(Row::Instruction, view.label());
        self.set_line(Row::PhaseTimer, &view.phase_remaining_text());
        self.set_line(Row::TotalTimer, &view.total_remaining_text());
    }

    /// Set the content of a row
    ///
    /// Text longer than `LINE_LEN` is truncated.
    pub fn set_line(&mut self, row: Row, text: &str) {
        let mut end = text.len().min(LINE_LEN);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let text = &text[..end];
        let line = &mut self.lines[row.index()];
        if line.as_str() != text {
            line.clear();
            let _ = line.push_str(text);
            self.dirty[row.index()] = true;
        }
    }

    /// Get a row's content
    pub fn line(&self, row: Row) -> &str {
        self.lines[row.index()].as_str()
    }

    /// Check if any row needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&d| d)
    }

    /// Mark every row for redraw (e.g. after the panel was reset)
    pub fn invalidate(&mut self) {
        self.dirty = [true; SCREEN_ROWS];
    }

    /// Copy out the pending frame and mark this buffer clean
    ///
    /// The copy keeps the dirty flags, so rendering it draws exactly what
    /// changed. Lets a shared buffer be released before drawing starts.
    pub fn take_frame(&mut self) -> Screen {
        let frame = self.clone();
        self.dirty = [false; SCREEN_ROWS];
        frame
    }

    /// Draw changed rows to a backend
    ///
    /// Returns the number of rows redrawn. Rows that fail to draw stay dirty.
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<usize, DisplayError> {
        if !backend.is_ready() {
            return Err(DisplayError::NotReady);
        }

        let mut drawn = 0;
        for row in Row::ALL {
            if !self.dirty[row.index()] {
                continue;
            }
            backend.clear_row(row)?;
            backend.draw_row(row, self.line(row))?;
            self.dirty[row.index()] = false;
            drawn += 1;
        }
        Ok(drawn)
    }
}

impl DisplaySink for Screen {
    fn show(&mut self, view: &SessionView) -> Result<(), DisplayError> {
        self.update(view);
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
