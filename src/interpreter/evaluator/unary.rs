use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates arithmetic negation.
    ///
    /// Negating a finite number is always finite, so this never fails on its
    /// own; errors come only from evaluating the operand.
    pub fn eval_negate(&self, expr: &Expr) -> EvalResult<f64> {
        Ok(-self.eval(expr)?)
    }
}
