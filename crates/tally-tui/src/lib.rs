//! Full-screen TUI implementation for tally.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{display, keypad, tape};
pub use runtime::TuiRuntime;
use tally_core::config::Config;

/// Runs the interactive calculator.
pub fn run_calculator(config: &Config) -> Result<()> {
    // The calculator requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The calculator requires a terminal.\n\
             Use `tally eval '...'` for non-interactive evaluation."
        );
    }

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()
}
