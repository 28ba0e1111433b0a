//! Small integer helpers.

/// Returns `true` if `n` is even.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Returns `true` if `n` is odd, including negative odd numbers.
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Computes `n!`, or `None` if it does not fit in a `u64` (`n > 20`).
///
/// # Examples
/// ```
/// use u_quickstats::integer::factorial;
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(10), Some(3_628_800));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1_u64, |acc, i| acc.checked_mul(i))
}

/// Product of all values; `1.0` for an empty slice.
pub fn product(values: &[f64]) -> f64 {
    values.iter().product()
}
