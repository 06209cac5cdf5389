use crate::error::ArithmeticError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operation on finite operands produced an infinite or NaN result.
    #[error("Error on line {line}: Result of '{operation}' is not a finite number.")]
    Overflow {
        /// The operator symbol that overflowed.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl RuntimeError {
    /// Attaches a source line to an error raised by the calculator.
    #[must_use]
    pub const fn from_arithmetic(error: ArithmeticError, line: usize) -> Self {
        match error {
            ArithmeticError::DivisionByZero => Self::DivisionByZero { line },
        }
    }

    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line } | Self::Overflow { line, .. } => *line,
        }
    }
}
