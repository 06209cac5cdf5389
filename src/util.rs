/// Approximate floating-point comparison.
///
/// `f64` arithmetic is not exact for most decimal fractions, so results are
/// checked against expectations with a tolerance. These helpers implement the
/// absolute/relative tolerance check, the decimal-digits check and an
/// inclusive range check.
pub mod approx;
/// Numeric conversion helpers.
///
/// This module provides safe functions for converting integer literals to
/// floating point without risking silent data loss or rounding errors.
pub mod num;
