use thiserror::Error;

/// Structural failures of the formula library.
///
/// Division by a caller-supplied zero is NOT an error here: every
/// formula propagates the IEEE-754 result (±inf / NaN) unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// An empty fill sequence was passed to the average-price computation.
    #[error("cannot average an empty fill sequence")]
    EmptyInput,
}
