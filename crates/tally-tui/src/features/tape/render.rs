//! Tape rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::state::TapeState;

/// Renders the computation history, newest entry at the bottom, just above
/// the display.
pub fn render_tape(frame: &mut Frame, tape: &TapeState, area: Rect) {
    let visible = area.height as usize;
    if visible == 0 || tape.is_empty() {
        return;
    }

    let mut lines: Vec<Line<'_>> = tape
        .entries()
        .iter()
        .rev()
        .take(visible)
        .map(|entry| Line::raw(format!("{} = {}", entry.expression, entry.result)))
        .collect();
    lines.reverse();

    // Bottom-align: pad at the top when the tape doesn't fill the area
    if lines.len() < visible {
        let padding = visible - lines.len();
        let mut padded = vec![Line::default(); padding];
        padded.extend(lines);
        lines = padded;
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(widget, area);
}
