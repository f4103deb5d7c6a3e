use thiserror::Error;

/// Error type for the bracketcalc crate
///
/// Every variant is terminal: the evaluation that raised it is abandoned and
/// no partial trace is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains a character outside the grammar, a malformed
    /// number, or tokens in an impossible order
    #[error("Invalid expression format")]
    InvalidFormat,
    /// A closing bracket has no opener, or closes an opener of the other kind
    #[error("Mismatched brackets")]
    MismatchedBrackets,
    /// An opening bracket is never closed
    #[error("Unclosed brackets")]
    UnclosedBrackets,
    /// The right operand of `/` is exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// A character was used as an operator but is not one
    #[error("Invalid operator: {0}")]
    InvalidOperator(char),
}
