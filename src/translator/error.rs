//! Translator fault types.
//!
//! None of these cross the translation boundary: a parse fault downgrades
//! to the empty command sequence, a run fault to whatever prefix was
//! emitted before it. The fault itself is only logged.

use thiserror::Error;

/// Fault raised while scanning or parsing program text. Since parsing
/// happens before any command is emitted, these always mean "no commands".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: unexpected character '{found}'")]
    UnexpectedChar { line: u32, found: char },

    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: u32 },

    #[error("line {line}: number literal out of range")]
    NumberOutOfRange { line: u32 },

    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: u32,
        expected: &'static str,
        found: String,
    },
}

/// Fault raised while running a parsed program. Commands emitted before
/// the fault point stay in the accumulator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error("line {line}: unknown command \"{name}\"")]
    UnknownCommand { line: u32, name: String },

    #[error("step budget of {budget} exhausted")]
    BudgetExhausted { budget: u32 },
}
