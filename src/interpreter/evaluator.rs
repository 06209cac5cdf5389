/// Core evaluation logic and context management.
///
/// Contains the runtime context, the dispatch over expression kinds and the
/// evaluation of whole programs.
pub mod core;

/// Binary operator evaluation logic.
///
/// Evaluates both operands and hands the arithmetic to the calculator,
/// attaching source lines to any failure.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;
