//! Keypad rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use tally_core::engine::Action;

use super::state::{KeypadState, button_rects};

/// Renders the button grid into `area`.
///
/// A pressed button (mouse click or keyboard equivalent) renders reversed
/// until its flash times out.
pub fn render_keypad(frame: &mut Frame, keypad: &KeypadState, area: Rect) {
    for (rect, b) in button_rects(area) {
        let mut style = match b.action {
            Action::Operator(_) | Action::Equals => Style::default().fg(Color::Yellow),
            Action::Clear | Action::Delete => Style::default().fg(Color::Red),
            Action::Digit(_) => Style::default(),
        };
        if keypad.is_pressed(b.action) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let widget = Paragraph::new(b.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, rect);
    }
}
