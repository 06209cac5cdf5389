/// Entry points for parsing whole sources and single expressions.
///
/// Splits the token stream into one expression per line and checks that
/// nothing is left over once an expression has been parsed.
pub mod core;

/// Unary and primary expressions.
///
/// Handles negation, numeric literals and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels.
pub mod binary;
