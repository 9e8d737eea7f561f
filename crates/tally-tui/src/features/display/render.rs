//! Display panel rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tally_core::display::DisplayLines;

/// Total height of the display panel (two lines plus borders).
pub const DISPLAY_HEIGHT: u16 = 4;

/// Renders the two-line display into `area`.
///
/// The upper line carries the pending operand and operator (dimmed); the
/// lower line the operand being entered. Right-aligned like a desk
/// calculator.
pub fn render_display(frame: &mut Frame, lines: &DisplayLines, area: Rect) {
    let content = vec![
        Line::styled(lines.upper.clone(), Style::default().fg(Color::DarkGray)),
        Line::raw(lines.lower.clone()),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}
