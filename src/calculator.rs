//! The arithmetic core.
//!
//! [`Calculator`] performs the four basic operations on `f64` operands. It is
//! stateless: every method is a pure function of its two arguments, so a
//! single value can be copied or shared across threads freely.

use tracing::{debug, trace};

use crate::{ast::BinaryOperator, error::ArithmeticError};

/// Result type used by the calculator.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Performs addition, subtraction, multiplication and division.
///
/// Results follow IEEE-754 `f64` semantics. They are not bit-exact for
/// non-terminating decimal fractions, so compare them with
/// [`approx_eq`](crate::util::approx::approx_eq) rather than `==`.
///
/// # Example
/// ```
/// use abacus::{calculator::Calculator, error::ArithmeticError};
///
/// let calc = Calculator::new();
/// assert_eq!(calc.add(2.0, 3.0), 5.0);
/// assert_eq!(calc.divide(6.0, 2.0), Ok(3.0));
/// assert_eq!(calc.divide(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `a + b`.
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "performing addition");
        a + b
    }

    /// Returns `a - b`.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "performing subtraction");
        a - b
    }

    /// Returns `a * b`.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "performing multiplication");
        a * b
    }

    /// Returns `a / b`.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero, whatever
    /// the value of `a` (including `0 / 0`). Negative zero counts as zero.
    pub fn divide(&self, a: f64, b: f64) -> ArithmeticResult<f64> {
        if b == 0.0 {
            debug!(a, "division by zero rejected");
            return Err(ArithmeticError::DivisionByZero);
        }
        trace!(a, b, "performing division");
        Ok(a / b)
    }

    /// Applies `op` to the two operands.
    ///
    /// # Errors
    /// Only [`BinaryOperator::Div`] can fail; see [`Calculator::divide`].
    ///
    /// # Example
    /// ```
    /// use abacus::{ast::BinaryOperator, calculator::Calculator};
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.apply(BinaryOperator::Mul, 2.0, 3.0), Ok(6.0));
    /// assert!(calc.apply(BinaryOperator::Div, 0.0, 0.0).is_err());
    /// ```
    pub fn apply(&self, op: BinaryOperator, a: f64, b: f64) -> ArithmeticResult<f64> {
        match op {
            BinaryOperator::Add => Ok(self.add(a, b)),
            BinaryOperator::Sub => Ok(self.subtract(a, b)),
            BinaryOperator::Mul => Ok(self.multiply(a, b)),
            BinaryOperator::Div => self.divide(a, b),
        }
    }
}
