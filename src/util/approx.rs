/// Default relative tolerance used by [`approx_eq`].
pub const REL_TOLERANCE: f64 = 1e-9;
/// Default absolute tolerance used by [`approx_eq`].
pub const ABS_TOLERANCE: f64 = 0.0;

/// Checks whether two values are close within the given tolerances.
///
/// The absolute difference is compared against the larger of `abs_tol` and
/// `rel_tol * max(|a|, |b|)`. Equal infinities are close. NaN is never close
/// to anything, itself included.
///
/// # Example
/// ```
/// use abacus::util::approx::is_close;
///
/// assert!(is_close(1.000_000_1, 1.0, 0.0, 1e-6));
/// assert!(!is_close(1.1, 1.0, 0.0, 1e-6));
/// assert!(is_close(0.0, 1e-12, 1e-9, 0.0));
/// ```
#[must_use]
pub fn is_close(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let difference = (a - b).abs();
    let max_norm = a.abs().max(b.abs());
    difference <= abs_tol.max(rel_tol * max_norm)
}

/// [`is_close`] with the default tolerances.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    is_close(a, b, ABS_TOLERANCE, REL_TOLERANCE)
}

/// Checks that `a` and `b` agree to `digits` decimal places.
///
/// Passes when `|a - b| < 10^-digits / 2`, so `0.1 + 0.2` is close to `0.3`
/// at five digits but `0.31` is not close to `0.3` at two.
///
/// # Example
/// ```
/// use abacus::util::approx::close_to_digits;
///
/// assert!(close_to_digits(0.1 + 0.2, 0.3, 5));
/// assert!(!close_to_digits(0.31, 0.3, 2));
/// ```
#[must_use]
pub fn close_to_digits(a: f64, b: f64, digits: i32) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() < 10f64.powi(-digits) / 2.0
}

/// Checks that `value` lies in the inclusive range `[floor, ceiling]`.
#[must_use]
pub fn within_range(value: f64, floor: f64, ceiling: f64) -> bool {
    value >= floor && value <= ceiling
}
