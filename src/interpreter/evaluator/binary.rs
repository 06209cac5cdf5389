use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation expression.
    ///
    /// Both operands are evaluated first, left before right, then the operator
    /// is applied by [`Context::eval_arithmetic`].
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The arithmetic operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        self.eval_arithmetic(op, left, right, line)
    }

    /// Applies an arithmetic operator to two evaluated operands.
    ///
    /// Division by zero is reported with the operator's line. A result that is
    /// infinite or NaN is reported as an overflow instead of being returned.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Context,
    /// };
    ///
    /// let ctx = Context::new();
    /// assert_eq!(ctx.eval_arithmetic(BinaryOperator::Mul, 1.5, 2.0, 1), Ok(3.0));
    /// assert_eq!(ctx.eval_arithmetic(BinaryOperator::Div, 1.0, 0.0, 4),
    ///            Err(RuntimeError::DivisionByZero { line: 4 }));
    /// ```
    pub fn eval_arithmetic(&self,
                           op: BinaryOperator,
                           left: f64,
                           right: f64,
                           line: usize)
                           -> EvalResult<f64> {
        trace!(%op, left, right, line, "applying operator");

        let value = self.calculator
                        .apply(op, left, right)
                        .map_err(|e| RuntimeError::from_arithmetic(e, line))?;

        if !value.is_finite() {
            debug!(%op, left, right, line, "operation overflowed");
            return Err(RuntimeError::Overflow { operation: op.to_string(),
                                                line });
        }

        Ok(value)
    }
}
