//! The operand/operator accumulator.
//!
//! State is three fields: the operand being entered (`current`), the operand
//! held from before the last chosen operator (`previous`), and the pending
//! operation. Operands stay text while being entered and are parsed to `f64`
//! only at compute time; a computed result is immediately rendered back to
//! text and becomes the new current operand, ready to be chained.
//!
//! Every degenerate input (second decimal point, delete on empty text,
//! operator before any digits, compute without both operands) is a silent
//! no-op. The accumulator never fails.

use crate::engine::Operation;

/// A discrete user action, as produced by the keypad, the key mapping, or
/// the expression tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A decimal digit or the decimal point was entered.
    Digit(char),
    /// An operator was chosen.
    Operator(Operation),
    /// Equals: resolve the pending operation.
    Equals,
    /// All clear.
    Clear,
    /// Delete the last entered character.
    Delete,
}

/// Record of one resolved computation.
///
/// The accumulator itself only keeps the result text; this record lets
/// callers observe what was evaluated (the tape, logging).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Computation {
    pub previous: f64,
    pub operation: Operation,
    pub current: f64,
    pub result: f64,
}

/// Calculator state and its transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    current: String,
    previous: String,
    operation: Option<Operation>,
}

impl Accumulator {
    /// Creates a cleared accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number currently being entered, as text. May be empty.
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// The operand held for the pending operation. Empty when none pending.
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// The pending operation, if an operator has been chosen.
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Dispatches a single user action.
    ///
    /// Returns the resolved computation when the action triggered one
    /// (explicitly via [`Action::Equals`], or implicitly when an operator
    /// chains onto a pending operation).
    pub fn apply(&mut self, action: Action) -> Option<Computation> {
        match action {
            Action::Digit(token) => {
                self.append_digit(token);
                None
            }
            Action::Operator(op) => self.choose_operation(op),
            Action::Equals => self.compute(),
            Action::Clear => {
                self.clear_all();
                None
            }
            Action::Delete => {
                self.delete_last_char();
                None
            }
        }
    }

    /// Appends a digit or the decimal point to the current operand.
    ///
    /// A second decimal point is ignored; the operand keeps at most one.
    /// This is text concatenation, not numeric addition.
    pub fn append_digit(&mut self, token: char) {
        if token == '.' && self.current.contains('.') {
            return;
        }
        self.current.push(token);
    }

    /// Resets to the initial cleared state.
    pub fn clear_all(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operation = None;
    }

    /// Removes the last character of the current operand, if any.
    pub fn delete_last_char(&mut self) {
        self.current.pop();
    }

    /// Stores `op` as the pending operation.
    ///
    /// Ignored while no number has been entered. An already pending
    /// operation is resolved first, so `1 + 5 ×` leaves `6 ×` pending;
    /// the returned computation is that implicit resolution. The current
    /// text always moves into the previous slot, leaving an empty operand
    /// ready for the next number's digits.
    pub fn choose_operation(&mut self, op: Operation) -> Option<Computation> {
        if self.current.is_empty() {
            return None;
        }
        let computed = if self.previous.is_empty() {
            None
        } else {
            self.compute()
        };
        self.operation = Some(op);
        self.previous = std::mem::take(&mut self.current);
        computed
    }

    /// Resolves the pending operation.
    ///
    /// A no-op unless an operation is pending and both operands parse as
    /// numbers. On success the result's text form becomes the current
    /// operand, the operation clears, and the previous operand empties.
    /// Division by zero yields an infinite or NaN result, not a failure.
    pub fn compute(&mut self) -> Option<Computation> {
        let operation = self.operation?;
        let previous: f64 = self.previous.parse().ok()?;
        let current: f64 = self.current.parse().ok()?;

        let result = operation.apply(previous, current);
        self.current = result.to_string();
        self.previous.clear();
        self.operation = None;

        Some(Computation {
            previous,
            operation,
            current,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(acc: &mut Accumulator, digits: &str) {
        for token in digits.chars() {
            acc.append_digit(token);
        }
    }

    #[test]
    fn test_digits_concatenate_in_call_order() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "123.45");
        assert_eq!(acc.current_operand(), "123.45");
    }

    #[test]
    fn test_second_decimal_point_is_ignored() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "1.2.3");
        assert_eq!(acc.current_operand(), "1.23");
        assert_eq!(acc.current_operand().matches('.').count(), 1);
    }

    #[test]
    fn test_delete_removes_last_char() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "42");
        acc.delete_last_char();
        assert_eq!(acc.current_operand(), "4");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut acc = Accumulator::new();
        acc.delete_last_char();
        assert_eq!(acc.current_operand(), "");
    }

    #[test]
    fn test_choose_operation_without_input_is_full_noop() {
        let mut acc = Accumulator::new();
        let computed = acc.choose_operation(Operation::Add);
        assert!(computed.is_none());
        assert_eq!(acc, Accumulator::new());
    }

    #[test]
    fn test_choose_operation_moves_current_to_previous() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "5");
        acc.choose_operation(Operation::Add);
        assert_eq!(acc.previous_operand(), "5");
        assert_eq!(acc.current_operand(), "");
        assert_eq!(acc.operation(), Some(Operation::Add));
    }

    #[test]
    fn test_compute_without_operation_is_noop() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "42");
        assert!(acc.compute().is_none());
        assert_eq!(acc.current_operand(), "42");
    }

    #[test]
    fn test_compute_with_missing_operand_is_noop() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "5");
        acc.choose_operation(Operation::Add);
        assert!(acc.compute().is_none());
        assert_eq!(acc.previous_operand(), "5");
        assert_eq!(acc.current_operand(), "");
        assert_eq!(acc.operation(), Some(Operation::Add));
    }

    #[test]
    fn test_add_round_trip() {
        let mut acc = Accumulator::new();
        acc.append_digit('5');
        acc.choose_operation(Operation::Add);
        acc.append_digit('3');
        let computed = acc.compute().expect("computation");
        assert_eq!(computed.result, 8.0);
        assert_eq!(acc.current_operand(), "8");
        assert_eq!(acc.previous_operand(), "");
        assert_eq!(acc.operation(), None);
    }

    #[test]
    fn test_chained_operator_computes_implicitly() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "10");
        acc.choose_operation(Operation::Add);
        acc.append_digit('5');
        let computed = acc.choose_operation(Operation::Multiply);
        assert_eq!(computed.expect("implicit computation").result, 15.0);
        assert_eq!(acc.previous_operand(), "15");
        assert_eq!(acc.operation(), Some(Operation::Multiply));
        assert_eq!(acc.current_operand(), "");
    }

    #[test]
    fn test_division_by_zero_yields_non_finite_text() {
        let mut acc = Accumulator::new();
        acc.append_digit('1');
        acc.choose_operation(Operation::Divide);
        acc.append_digit('0');
        let computed = acc.compute().expect("computation");
        assert!(computed.result.is_infinite());
        let shown: f64 = acc.current_operand().parse().expect("parseable");
        assert!(!shown.is_finite());
    }

    #[test]
    fn test_decimal_arithmetic() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "1.5");
        acc.choose_operation(Operation::Add);
        enter(&mut acc, "2.25");
        acc.compute();
        assert_eq!(acc.current_operand(), "3.75");
    }

    #[test]
    fn test_result_chains_into_next_operation() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "6");
        acc.choose_operation(Operation::Multiply);
        enter(&mut acc, "7");
        acc.compute();
        acc.choose_operation(Operation::Subtract);
        enter(&mut acc, "2");
        acc.compute();
        assert_eq!(acc.current_operand(), "40");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut acc = Accumulator::new();
        enter(&mut acc, "12");
        acc.choose_operation(Operation::Divide);
        enter(&mut acc, "3");
        acc.clear_all();
        assert_eq!(acc, Accumulator::new());
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut acc = Accumulator::new();
        let _ = acc.apply(Action::Digit('9'));
        let _ = acc.apply(Action::Operator(Operation::Subtract));
        let _ = acc.apply(Action::Digit('4'));
        let computed = acc.apply(Action::Equals);
        assert_eq!(computed.expect("computation").result, 5.0);
        let _ = acc.apply(Action::Clear);
        assert_eq!(acc, Accumulator::new());
    }
}
