//! Moment and order statistics with optional sampling.
//!
//! Every statistic comes in two forms: a full-sequence version and a
//! `*_sampled` version that takes a sample count `k` and an RNG. Sampling
//! only narrows: with `k >= len` the sampled form is the full form and
//! consumes no randomness.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: plain left-to-right accumulation after numeric coercion
//!   (see [`Scalar`]).
//! - **Variance/StdDev**: naive two-pass population variance (divide by N).
//!   No compensation is applied, so catastrophic cancellation on
//!   ill-conditioned input is possible.
//! - **Median/Percentile**: sort-based. Both reorder the caller's slice.
//!
//! # Degenerate input
//!
//! Moment statistics of an empty sequence follow IEEE 754 (`0/0 = NaN`).
//! Order statistics report empty or out-of-range lookups as
//! [`StatsError`]s instead.

use rand::Rng;

use crate::error::{StatsError, StatsResult};
use crate::random::{sample, SampleSpec};
use crate::scalar::Scalar;

// ---------------------------------------------------------------------------
// Moment statistics
// ---------------------------------------------------------------------------

/// Sums the coerced values of `data`.
///
/// Elements that fail coercion become NaN and poison the result.
///
/// # Examples
/// ```
/// use u_quickstats::stats::sum;
/// assert_eq!(sum(&[1, 2, 3]), 6.0);
/// assert_eq!(sum(&["1.5", "2.5"]), 4.0);
/// assert!(sum(&["1", "x"]).is_nan());
/// ```
pub fn sum<T: Scalar>(data: &[T]) -> f64 {
    data.iter().fold(0.0, |acc, x| acc + x.to_number())
}

/// Arithmetic mean, `sum(data) / len`.
///
/// Returns NaN for an empty slice.
///
/// # Examples
/// ```
/// use u_quickstats::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert!(mean::<f64>(&[]).is_nan());
/// ```
pub fn mean<T: Scalar>(data: &[T]) -> f64 {
    sum(data) / data.len() as f64
}

/// Arithmetic mean over `k` elements drawn with replacement.
///
/// Returns NaN when `k == 0` (and the slice is non-empty).
///
/// # Examples
/// ```
/// use u_quickstats::random::create_rng;
/// use u_quickstats::stats::mean_sampled;
/// let data: Vec<f64> = (0..1000).map(f64::from).collect();
/// let mut rng = create_rng(42);
/// let m = mean_sampled(&data, 200, &mut rng);
/// assert!(m > 0.0 && m < 999.0);
/// ```
pub fn mean_sampled<T: Scalar + Clone, R: Rng>(data: &[T], k: usize, rng: &mut R) -> f64 {
    mean(&sample(data, k, rng))
}

/// Population variance, `Σ(xᵢ − x̄)² / N`.
///
/// # Algorithm
/// Two passes: the mean first, then the sum of squared deviations.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_quickstats::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v) - 4.0).abs() < 1e-12);
/// ```
pub fn variance<T: Scalar>(data: &[T]) -> f64 {
    let m = mean(data);
    let sum_of_squares = data.iter().fold(0.0, |acc, x| {
        let d = x.to_number() - m;
        acc + d * d
    });
    sum_of_squares / data.len() as f64
}

/// Approximate population variance from `k` random terms.
///
/// The reference mean is always the mean of the **full** sequence. Each of
/// the `k` squared deviations is taken at a freshly drawn uniform index, so
/// no fixed sample is materialised and the same element may be counted
/// more than once. The result is divided by `k`.
///
/// With `k >= len` this is exactly [`variance`]. With `k == 0` on a
/// non-empty slice the result is NaN.
///
/// # Complexity
/// Time: O(n + k), Space: O(1)
pub fn variance_sampled<T: Scalar, R: Rng>(data: &[T], k: usize, rng: &mut R) -> f64 {
    let Some(k) = SampleSpec::Samples(k).draws(data.len()) else {
        return variance(data);
    };
    let m = mean(data);
    let n = data.len();
    let sum_of_squares: f64 = (0..k)
        .map(|_| {
            let d = data[rng.random_range(0..n)].to_number() - m;
            d * d
        })
        .sum();
    sum_of_squares / k as f64
}

/// Population standard deviation, `√variance(data)`.
pub fn std_dev<T: Scalar>(data: &[T]) -> f64 {
    variance(data).sqrt()
}

/// Square root of [`variance_sampled`].
pub fn std_dev_sampled<T: Scalar, R: Rng>(data: &[T], k: usize, rng: &mut R) -> f64 {
    variance_sampled(data, k, rng).sqrt()
}

// ---------------------------------------------------------------------------
// Order statistics
// ---------------------------------------------------------------------------

/// Sorts `data` numerically in place and returns it.
///
/// Ascending by default. With `descending`, the slice is sorted ascending
/// and then reversed, so elements that compare equal appear in the reverse
/// of their original relative order (a direct descending stable sort would
/// keep it).
///
/// The comparator is [`f64::total_cmp`]: `-0.0` sorts before `0.0`,
/// positive NaNs sort after `+∞` and negative NaNs before `−∞`.
///
/// # Complexity
/// Time: O(n log n), Space: O(n) (stable merge sort buffer)
///
/// # Examples
/// ```
/// use u_quickstats::stats::sort_numeric;
/// let mut v = [10.0, 9.0, 100.0, 1.0];
/// assert_eq!(sort_numeric(&mut v, false), &[1.0, 9.0, 10.0, 100.0]);
/// assert_eq!(sort_numeric(&mut v, true), &[100.0, 10.0, 9.0, 1.0]);
/// ```
pub fn sort_numeric(data: &mut [f64], descending: bool) -> &mut [f64] {
    data.sort_by(f64::total_cmp);
    if descending {
        data.reverse();
    }
    data
}

/// Median of `data`, sorting it in place.
///
/// For length `L`, let `m = ⌊(L − 1) / 2⌋`. Odd `L` returns `sorted[m]`;
/// even `L` returns the mean of `sorted[m]` and `sorted[m + 1]`.
///
/// # Errors
/// Returns [`StatsError::EmptySequence`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_quickstats::stats::median;
/// let mut v = [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
/// assert_eq!(median(&mut v).unwrap(), 5.5);
/// assert_eq!(v[0], 1.0); // sorted in place
/// ```
pub fn median(data: &mut [f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptySequence {
            operation: "median",
        });
    }
    let sorted = sort_numeric(data, false);
    let len = sorted.len();
    let mid = (len - 1) / 2;
    if len % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid] + sorted[mid + 1]) / 2.0)
    }
}

/// Median over `k` elements drawn with replacement.
///
/// When sampling occurs the drawn copy is sorted and `data` is left
/// untouched. With `k >= len`, `data` itself is sorted in place.
///
/// # Errors
/// Returns [`StatsError::EmptySequence`] if the effective sequence is empty.
pub fn median_sampled<R: Rng>(data: &mut [f64], k: usize, rng: &mut R) -> StatsResult<f64> {
    match SampleSpec::Samples(k).draws(data.len()) {
        Some(k) => median(&mut sample(data, k, rng).into_owned()),
        None => median(data),
    }
}

/// Value at fraction `p` of the ascending sort: `sorted[⌊p · L⌋]`.
///
/// No interpolation and no clamping. `p = 1.0` (or anything mapping outside
/// `[0, L)`) is an error rather than being pinned to the last element; the
/// check runs before sorting, so a rejected call leaves `data` unmodified.
///
/// # Errors
/// Returns [`StatsError::PercentileOutOfRange`] if `⌊p · L⌋` is not a valid
/// index (this includes NaN `p` and empty `data`).
///
/// # Examples
/// ```
/// use u_quickstats::stats::percentile;
/// let mut v: Vec<f64> = (0..100).rev().map(f64::from).collect();
/// assert_eq!(percentile(&mut v, 0.25).unwrap(), 25.0);
/// assert_eq!(percentile(&mut v, 0.0).unwrap(), 0.0);
/// assert!(percentile(&mut v, 1.0).is_err());
/// ```
pub fn percentile(data: &mut [f64], p: f64) -> StatsResult<f64> {
    let index = percentile_index(p, data.len())?;
    Ok(sort_numeric(data, false)[index])
}

/// [`percentile`] over `k` elements drawn with replacement.
///
/// The index is computed against the sampled length. As with
/// [`median_sampled`], `data` is only reordered when no sampling occurs.
///
/// # Errors
/// Returns [`StatsError::PercentileOutOfRange`] as for [`percentile`].
pub fn percentile_sampled<R: Rng>(
    data: &mut [f64],
    p: f64,
    k: usize,
    rng: &mut R,
) -> StatsResult<f64> {
    match SampleSpec::Samples(k).draws(data.len()) {
        Some(k) => percentile(&mut sample(data, k, rng).into_owned(), p),
        None => percentile(data, p),
    }
}

fn percentile_index(p: f64, len: usize) -> StatsResult<usize> {
    let index = (p * len as f64).floor();
    if index >= 0.0 && index < len as f64 {
        Ok(index as usize)
    } else {
        Err(StatsError::PercentileOutOfRange { p, index, len })
    }
}

// ============================================================================
// Tests
// ============================================================================
