//! Non-interactive expression evaluation.
//!
//! Evaluates a flat infix expression with the same left-to-right,
//! one-pending-operation semantics as the interactive calculator: each
//! operator resolves the previous one first, and a final equals is implied.

use anyhow::{Result, bail};
use tally_core::config::Config;
use tally_core::display::format_operand;
use tally_core::engine::{Accumulator, Action, Operation};

pub fn run(config: &Config, expr: &str, raw: bool) -> Result<()> {
    let actions = tokenize(expr)?;

    let mut accumulator = Accumulator::new();
    for action in actions {
        let _ = accumulator.apply(action);
    }
    let _ = accumulator.compute();

    let result = accumulator.current_operand();
    if result.is_empty() {
        bail!("No result: expression {expr:?} ends mid-operation");
    }

    if raw {
        println!("{result}");
    } else {
        println!("{}", format_operand(result, config.grouping_separator()));
    }
    Ok(())
}

/// Tokenizes an expression into engine actions.
///
/// Digits and the decimal point become digit entries. Operators accept both
/// the keyboard forms (`+ - * /`) and the display symbols (`− × ÷`, plus
/// `x` as a multiply alias). Whitespace is ignored; anything else is
/// rejected here, before it reaches the engine.
fn tokenize(expr: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for c in expr.chars() {
        let action = match c {
            '0'..='9' | '.' => Action::Digit(c),
            '+' => Action::Operator(Operation::Add),
            '-' | '−' => Action::Operator(Operation::Subtract),
            '*' | '×' | 'x' | 'X' => Action::Operator(Operation::Multiply),
            '/' | '÷' => Action::Operator(Operation::Divide),
            '=' => Action::Equals,
            c if c.is_whitespace() => continue,
            _ => bail!("Unexpected character {c:?} in expression"),
        };
        actions.push(action);
    }
    Ok(actions)
}
