//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects
//!
//! The one exception to "never mutate" is recording the keypad's rect in a
//! `Cell` so mouse clicks can be routed to the button that was drawn.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tally_core::display::display_lines;

use crate::features::display::{DISPLAY_HEIGHT, render_display};
use crate::features::keypad::{self, render_keypad};
use crate::features::tape::render_tape;
use crate::state::AppState;

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                 // Tape
            Constraint::Length(DISPLAY_HEIGHT), // Display
            Constraint::Length(keypad::grid_height()),
            Constraint::Length(STATUS_HEIGHT), // Status line
        ])
        .split(area);

    let column = centered_column(area);

    render_tape(frame, &app.tape, within(chunks[0], column));

    let lines = display_lines(&app.accumulator, app.config.grouping_separator());
    render_display(frame, &lines, within(chunks[1], column));

    // Record where the keypad was drawn for mouse click routing
    let keypad_area = within(chunks[2], column);
    app.keypad_area.set(keypad_area);
    render_keypad(frame, &app.keypad, keypad_area);

    render_status(frame, app, chunks[3]);
}

/// Horizontal span of the calculator column, centered in the terminal.
///
/// Tape, display, and keypad share it so their edges line up.
fn centered_column(area: Rect) -> (u16, u16) {
    let width = keypad::grid_width().min(area.width);
    let x = area.x + (area.width - width) / 2;
    (x, width)
}

fn within(area: Rect, (x, width): (u16, u16)) -> Rect {
    Rect {
        x,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Renders the status line: key hints and the transient copy flash.
fn render_status(frame: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(
        " q quit · y copy · esc clear · backspace delete",
        Style::default().fg(Color::DarkGray),
    )];
    if app.status.copied_at.is_some() {
        spans.push(Span::styled("  copied", Style::default().fg(Color::Green)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
