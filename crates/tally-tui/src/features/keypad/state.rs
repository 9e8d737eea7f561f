//! Keypad grid model and mouse hit-testing.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use tally_core::engine::{Action, Operation};

/// One keypad button: a label, the engine action it triggers, and how many
/// grid cells it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub span: u16,
}

const fn button(label: &'static str, action: Action) -> Button {
    Button {
        label,
        action,
        span: 1,
    }
}

const fn wide(label: &'static str, action: Action) -> Button {
    Button {
        label,
        action,
        span: 2,
    }
}

/// The keypad layout, top row first. Each row spans four grid columns;
/// `AC` and `0` are double width.
pub const ROWS: &[&[Button]] = &[
    &[
        wide("AC", Action::Clear),
        button("DEL", Action::Delete),
        button("÷", Action::Operator(Operation::Divide)),
    ],
    &[
        button("7", Action::Digit('7')),
        button("8", Action::Digit('8')),
        button("9", Action::Digit('9')),
        button("×", Action::Operator(Operation::Multiply)),
    ],
    &[
        button("4", Action::Digit('4')),
        button("5", Action::Digit('5')),
        button("6", Action::Digit('6')),
        button("−", Action::Operator(Operation::Subtract)),
    ],
    &[
        button("1", Action::Digit('1')),
        button("2", Action::Digit('2')),
        button("3", Action::Digit('3')),
        button("+", Action::Operator(Operation::Add)),
    ],
    &[
        wide("0", Action::Digit('0')),
        button(".", Action::Digit('.')),
        button("=", Action::Equals),
    ],
];

/// Number of grid columns in the keypad.
const GRID_COLUMNS: u16 = 4;

/// Width of one keypad cell at its native size, borders included.
const CELL_WIDTH: u16 = 9;

/// Height of one keypad cell, borders included.
const CELL_HEIGHT: u16 = 3;

/// Total keypad width at the native cell size.
pub fn grid_width() -> u16 {
    GRID_COLUMNS * CELL_WIDTH
}

/// Total keypad height at the native cell size.
pub fn grid_height() -> u16 {
    ROWS.len() as u16 * CELL_HEIGHT
}

/// Computes the screen rect of every button within `area`.
///
/// Render and mouse routing share this geometry, so a click always lands on
/// the button that was drawn under it. Cells shrink uniformly when the area
/// is smaller than the native grid size.
pub fn button_rects(area: Rect) -> Vec<(Rect, Button)> {
    let rows = ROWS.len() as u16;
    let cell_width = area.width / GRID_COLUMNS;
    let cell_height = area.height / rows;
    if cell_width == 0 || cell_height == 0 {
        return Vec::new();
    }

    let mut rects = Vec::new();
    for (row_index, row) in ROWS.iter().enumerate() {
        let y = area.y + row_index as u16 * cell_height;
        let mut x = area.x;
        for b in *row {
            let width = cell_width * b.span;
            rects.push((
                Rect {
                    x,
                    y,
                    width,
                    height: cell_height,
                },
                *b,
            ));
            x += width;
        }
    }
    rects
}

/// Returns the button under the given terminal coordinates, if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    let position = Position { x: column, y: row };
    button_rects(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, b)| b)
}

/// Keypad UI state: which button is flashing as pressed.
#[derive(Debug, Default)]
pub struct KeypadState {
    pressed: Option<(Action, Instant)>,
}

impl KeypadState {
    /// How long a pressed button stays highlighted.
    pub const PRESS_FLASH: Duration = Duration::from_millis(150);

    /// Marks the button carrying `action` as pressed.
    ///
    /// Keyboard equivalents flash the same button a click would.
    pub fn press(&mut self, action: Action) {
        self.pressed = Some((action, Instant::now()));
    }

    /// Clears the flash once it has expired.
    pub fn check_press_timeout(&mut self) {
        if let Some((_, at)) = self.pressed
            && at.elapsed() >= Self::PRESS_FLASH
        {
            self.pressed = None;
        }
    }

    /// Returns true while the button carrying `action` should highlight.
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.is_some_and(|(pressed, _)| pressed == action)
    }

    /// Returns true while any flash is pending (the runtime polls faster).
    pub fn has_pending_flash(&self) -> bool {
        self.pressed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_spans_four_columns() {
        for row in ROWS {
            let total: u16 = row.iter().map(|b| b.span).sum();
            assert_eq!(total, GRID_COLUMNS);
        }
    }

    #[test]
    fn test_hit_test_finds_buttons() {
        let area = Rect::new(0, 0, 36, 15);

        // Middle of the "7" button (second row, first column)
        let seven = button_at(area, 4, 4).expect("button");
        assert_eq!(seven.action, Action::Digit('7'));

        // "÷" sits in the last column of the top row
        let divide = button_at(area, 30, 1).expect("button");
        assert_eq!(divide.action, Action::Operator(Operation::Divide));
    }

    #[test]
    fn test_wide_buttons_cover_both_cells() {
        let area = Rect::new(0, 0, 36, 15);
        let left = button_at(area, 2, 13).expect("button");
        let right = button_at(area, 16, 13).expect("button");
        assert_eq!(left.action, Action::Digit('0'));
        assert_eq!(right.action, Action::Digit('0'));
    }

    #[test]
    fn test_hit_test_misses_outside_the_grid() {
        let area = Rect::new(10, 5, 36, 15);
        assert!(button_at(area, 0, 0).is_none());
        assert!(button_at(area, 100, 100).is_none());
    }

    #[test]
    fn test_tiny_area_has_no_buttons() {
        assert!(button_rects(Rect::new(0, 0, 3, 2)).is_empty());
    }

    #[test]
    fn test_press_flash_targets_one_button() {
        let mut keypad = KeypadState::default();
        keypad.press(Action::Digit('7'));
        assert!(keypad.is_pressed(Action::Digit('7')));
        assert!(!keypad.is_pressed(Action::Digit('8')));
        assert!(keypad.has_pending_flash());
    }
}
