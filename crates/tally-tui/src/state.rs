//! Application state composition.
//!
//! ```text
//! AppState
//! ├── accumulator: Accumulator   (operands, pending operation)
//! ├── keypad: KeypadState        (pressed-button flash)
//! ├── tape: TapeState            (computation history)
//! ├── status: StatusState        (clipboard flash)
//! └── config: Config             (display separator, tape limit)
//! ```
//!
//! The accumulator is the single source of truth for calculator state; the
//! rest is presentation. All mutation goes through the reducer in
//! `update.rs`.

use std::cell::Cell;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tally_core::config::Config;
use tally_core::engine::Accumulator;

use crate::keypad::KeypadState;
use crate::tape::TapeState;

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The calculator engine.
    pub accumulator: Accumulator,
    /// Keypad state (pressed-button flash).
    pub keypad: KeypadState,
    /// Computation history.
    pub tape: TapeState,
    /// Status line state (clipboard flash).
    pub status: StatusState,
    /// Calculator configuration.
    pub config: Config,
    /// Keypad area rect (set during render, used for mouse click routing).
    pub keypad_area: Cell<Rect>,
}

impl AppState {
    /// Creates a fresh, cleared application state.
    pub fn new(config: Config) -> Self {
        let tape = TapeState::new(config.tape_limit);
        Self {
            should_quit: false,
            accumulator: Accumulator::new(),
            keypad: KeypadState::default(),
            tape,
            status: StatusState::default(),
            config,
            keypad_area: Cell::new(Rect::default()),
        }
    }
}

/// Status line state.
#[derive(Debug, Default)]
pub struct StatusState {
    /// When the last clipboard copy happened (drives the "copied" flash).
    pub copied_at: Option<Instant>,
}

impl StatusState {
    /// How long the "copied" flash stays visible.
    pub const COPY_FLASH: Duration = Duration::from_millis(1500);

    /// Starts the "copied" flash.
    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// Clears the flash once it has expired.
    pub fn check_copy_timeout(&mut self) {
        if let Some(at) = self.copied_at
            && at.elapsed() >= Self::COPY_FLASH
        {
            self.copied_at = None;
        }
    }
}
