use thiserror::Error;

/// Reasons a sum cannot be computed. A failed call never yields a partial
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    #[error("no arguments given")]
    EmptyArguments,

    /// `index` is the position of the first non-numeric argument and `found`
    /// its JSON kind (`"boolean"`, `"string"`, ...).
    #[error("arguments must all be numbers (argument {index} is {found})")]
    InvalidArgumentType { index: usize, found: &'static str },

    /// Adding argument `index` to the running total left the integer type's
    /// range. Checked at every step of the left-to-right fold.
    #[error("sum overflows at argument {index}")]
    Overflow { index: usize },
}
