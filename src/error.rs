/// Arithmetic errors.
///
/// The failure conditions of the four basic operations. Only division can
/// fail, and only when the divisor is zero.
pub mod arithmetic_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Parse errors include unexpected tokens, unbalanced parentheses and
/// literals that cannot be represented exactly.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as division by zero or a result that overflowed.
pub mod runtime_error;

pub use arithmetic_error::ArithmeticError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while turning source text into results.
///
/// Returned by the crate-level entry points so callers can handle both phases
/// with a single `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
