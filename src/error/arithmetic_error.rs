/// Errors raised by [`Calculator`](crate::calculator::Calculator) operations.
///
/// The operations are total over finite operands except for division, so this
/// enum has a single variant. It carries no location: the calculator knows
/// nothing about source text. The evaluator attaches a line number when it
/// converts this into a [`RuntimeError`](super::RuntimeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ArithmeticError {
    /// The divisor of a division was zero (`0.0` or `-0.0`).
    #[error("Division by zero")]
    DivisionByZero,
}
