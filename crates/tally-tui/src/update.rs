//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tally_core::engine::{Action, Operation};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::keypad;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.keypad.check_press_timeout();
            app.status.check_copy_timeout();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ClipboardCopied => {
            app.status.mark_copied();
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => vec![],
    }
}

/// Maps a key press to an engine action.
///
/// Exactly one engine call per recognized key; the Backspace key and the
/// on-screen DEL button route to the same delete operation.
fn action_for_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char(c @ ('0'..='9' | '.')) => Some(Action::Digit(c)),
        KeyCode::Char('+') => Some(Action::Operator(Operation::Add)),
        KeyCode::Char('-') => Some(Action::Operator(Operation::Subtract)),
        KeyCode::Char('*') => Some(Action::Operator(Operation::Multiply)),
        KeyCode::Char('/') => Some(Action::Operator(Operation::Divide)),
        KeyCode::Char('=') | KeyCode::Enter => Some(Action::Equals),
        KeyCode::Backspace => Some(Action::Delete),
        KeyCode::Delete | KeyCode::Esc => Some(Action::Clear),
        _ => None,
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Quit and clipboard keys take precedence over calculator input
    match key.code {
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![UiEffect::Quit];
        }
        KeyCode::Char('y') => {
            let text = app.accumulator.current_operand().to_string();
            if text.is_empty() {
                return vec![];
            }
            return vec![UiEffect::CopyToClipboard { text }];
        }
        _ => {}
    }

    if let Some(action) = action_for_key(key) {
        press(app, action);
    }
    vec![]
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let area = app.keypad_area.get();
        if let Some(b) = keypad::button_at(area, mouse.column, mouse.row) {
            press(app, b.action);
        }
    }
    vec![]
}

/// Applies an engine action: flashes the keypad button and records any
/// resolved computation on the tape.
fn press(app: &mut AppState, action: Action) {
    app.keypad.press(action);
    if let Some(computation) = app.accumulator.apply(action) {
        tracing::debug!(
            "{} {} {} = {}",
            computation.previous,
            computation.operation,
            computation.current,
            computation.result
        );
        app.tape
            .push(&computation, app.config.grouping_separator());
    }
}
