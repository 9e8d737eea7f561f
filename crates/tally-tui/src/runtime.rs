//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! The loop is fully synchronous: terminal events are polled with a
//! deadline, a `Tick` fires at the poll cadence, and every accumulator
//! operation runs to completion before the next event is processed.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tally_core::config::Config;

use crate::common::Clipboard;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while a flash is pending (prompt redraw when it clears).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or quit.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime, taking over the terminal.
    pub fn new(config: Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config),
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("calculator started");
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;
            if !events.is_empty() {
                dirty = true;
            }

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        tracing::info!("calculator stopped");
        Ok(())
    }

    /// Collects terminal events, emitting a `Tick` at the poll cadence.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Poll fast while a flash is pending so it clears promptly
        let tick_interval = if self.state.keypad.has_pending_flash()
            || self.state.status.copied_at.is_some()
        {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::CopyToClipboard { text } => {
                // Clipboard failures (headless session) are non-fatal
                match Clipboard::copy(&text) {
                    Ok(()) => {
                        let follow_up = update::update(&mut self.state, UiEvent::ClipboardCopied);
                        self.execute_effects(follow_up);
                    }
                    Err(error) => tracing::warn!("clipboard copy failed: {error:#}"),
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
