//! Tape state: the in-memory history of resolved computations.

use std::collections::VecDeque;

use tally_core::display::format_operand;
use tally_core::engine::Computation;

/// One resolved computation, formatted at push time so later separator
/// changes don't rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeEntry {
    /// Left-hand side as shown, e.g. `15 × 3`.
    pub expression: String,
    /// Formatted result text.
    pub result: String,
}

/// Append-only history of computations; the oldest entry is evicted once
/// the configured limit is reached.
#[derive(Debug)]
pub struct TapeState {
    entries: VecDeque<TapeEntry>,
    limit: usize,
}

impl TapeState {
    /// Creates an empty tape holding at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Records a computation. A limit of zero disables the tape.
    pub fn push(&mut self, computation: &Computation, separator: Option<char>) {
        if self.limit == 0 {
            return;
        }

        let expression = format!(
            "{} {} {}",
            format_operand(&computation.previous.to_string(), separator),
            computation.operation.symbol(),
            format_operand(&computation.current.to_string(), separator),
        );
        let result = format_operand(&computation.result.to_string(), separator);

        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(TapeEntry { expression, result });
    }

    /// The recorded entries, oldest first.
    pub fn entries(&self) -> &VecDeque<TapeEntry> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
