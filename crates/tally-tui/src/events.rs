//! UI event types.
//!
//! All external inputs are converted to `UiEvent` before being processed by
//! the reducer. Events apply in exactly the order the terminal delivers
//! them; there is no reordering or batching of user input.

use crossterm::event::Event as CrosstermEvent;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick: drives flash timeouts and render cadence.
    Tick,
    /// Raw terminal input (keys, mouse, resize).
    Terminal(CrosstermEvent),
    /// Clipboard copy succeeded - show brief feedback in the status line.
    ClipboardCopied,
}
