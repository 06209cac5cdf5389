use tracing::debug;

use crate::{ast::Expr, calculator::Calculator, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Expressions carry no variables or functions, so the only thing the context
/// holds is the [`Calculator`] every binary operation is routed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// Performs the arithmetic for every binary operation.
    pub calculator: Calculator,
}

impl Context {
    /// Creates a new evaluation context.
    #[must_use]
    pub const fn new() -> Self {
        Self { calculator: Calculator::new() }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Literals
    /// evaluate to themselves, negation flips the sign and binary operations
    /// evaluate left then right before applying the operator.
    ///
    /// # Errors
    /// - `DivisionByZero` when a divisor evaluates to zero.
    /// - `Overflow` when an operation yields a non-finite number.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 6.0,
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Literal { value: 2.0,
    ///                                                             line:  1, }),
    ///                             line:  1, };
    /// assert_eq!(Context::new().eval(&expr), Ok(3.0));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Negate { expr, .. } => self.eval_negate(expr),
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line)
            },
        }
    }

    /// Evaluates a sequence of expressions in order.
    ///
    /// # Errors
    /// Stops at, and returns, the first runtime error.
    pub fn eval_program(&self, program: &[Expr]) -> EvalResult<Vec<f64>> {
        let mut results = Vec::with_capacity(program.len());
        for expr in program {
            let value = self.eval(expr)?;
            debug!(line = expr.line_number(), value, "evaluated expression");
            results.push(value);
        }
        Ok(results)
    }
}
