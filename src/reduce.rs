//! Chunked minimum and maximum.
//!
//! A whole-sequence extremum is computed by splitting the sequence into
//! contiguous chunks of a fixed size, reducing each chunk, and reducing the
//! per-chunk results. The working set of any single reduction step is
//! bounded by the chunk size, which keeps very large inputs well behaved.
//!
//! NaN is not filtered: a chunk containing NaN reduces to NaN, and so does
//! the final result.

use rand::Rng;

use crate::error::{StatsError, StatsResult};
use crate::random::sample;

/// Elements per chunk used by [`min`], [`max`] and [`BatchedReducer::default`].
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Which extremum a reduction computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    pub fn as_str(self) -> &'static str {
        match self {
            Extremum::Min => "min",
            Extremum::Max => "max",
        }
    }

    /// Combines two values, propagating NaN. `-0.0` ranks below `0.0`.
    ///
    /// # Examples
    /// ```
    /// use u_quickstats::reduce::Extremum;
    /// assert_eq!(Extremum::Max.pick(1.0, 2.0), 2.0);
    /// assert_eq!(Extremum::Min.pick(1.0, 2.0), 1.0);
    /// assert!(Extremum::Max.pick(1.0, f64::NAN).is_nan());
    /// ```
    #[inline]
    pub fn pick(self, a: f64, b: f64) -> f64 {
        if a.is_nan() || b.is_nan() {
            return f64::NAN;
        }
        match self {
            Extremum::Min if b < a || (b == a && b.is_sign_negative()) => b,
            Extremum::Max if b > a || (b == a && b.is_sign_positive()) => b,
            _ => a,
        }
    }

    /// Single-pass reduction; `None` for an empty slice.
    fn over(self, values: &[f64]) -> Option<f64> {
        let (&first, rest) = values.split_first()?;
        Some(rest.iter().fold(first, |acc, &x| self.pick(acc, x)))
    }
}

/// Computes extrema chunk by chunk.
///
/// # Examples
/// ```
/// use u_quickstats::reduce::{BatchedReducer, Extremum};
/// let reducer = BatchedReducer::new(2).unwrap();
/// let data = [3.0, 1.0, 4.0, 1.0, 5.0];
/// assert_eq!(reducer.reduce(&data, Extremum::Max).unwrap(), 5.0);
/// assert_eq!(reducer.reduce(&data, Extremum::Min).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchedReducer {
    chunk_size: usize,
}

impl BatchedReducer {
    /// Creates a reducer that processes `chunk_size` elements per chunk.
    ///
    /// # Errors
    /// Returns [`StatsError::InvalidChunkSize`] if `chunk_size == 0`.
    pub fn new(chunk_size: usize) -> StatsResult<Self> {
        if chunk_size == 0 {
            return Err(StatsError::InvalidChunkSize);
        }
        Ok(Self { chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the extremum `op` of `data`.
    ///
    /// # Algorithm
    /// 1. Partition `data` into chunks of `chunk_size` (the last may be shorter).
    /// 2. Reduce each chunk with `op`.
    /// 3. Reduce the per-chunk results with `op`.
    ///
    /// Because min and max are associative and commutative, the result is
    /// identical to a single scan over the whole slice.
    ///
    /// # Complexity
    /// Time: O(n), Space: O(n / chunk_size)
    ///
    /// # Errors
    /// Returns [`StatsError::EmptySequence`] if `data` is empty.
    pub fn reduce(&self, data: &[f64], op: Extremum) -> StatsResult<f64> {
        let empty = || StatsError::EmptySequence {
            operation: op.as_str(),
        };
        let batch = data
            .chunks(self.chunk_size)
            .map(|chunk| op.over(chunk))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(empty)?;
        tracing::trace!(
            len = data.len(),
            chunks = batch.len(),
            op = op.as_str(),
            "batched reduction"
        );
        op.over(&batch).ok_or_else(empty)
    }
}

impl Default for BatchedReducer {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Returns the smallest value of `data`.
///
/// # Errors
/// Returns [`StatsError::EmptySequence`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_quickstats::reduce::min;
/// assert_eq!(min(&[-1.0, 0.0, 1.0]).unwrap(), -1.0);
/// assert!(min(&[]).is_err());
/// ```
pub fn min(data: &[f64]) -> StatsResult<f64> {
    BatchedReducer::default().reduce(data, Extremum::Min)
}

/// Returns the largest value of `data`.
///
/// # Errors
/// Returns [`StatsError::EmptySequence`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_quickstats::reduce::max;
/// assert_eq!(max(&[-1.0, -2.0, -3.0]).unwrap(), -1.0);
/// ```
pub fn max(data: &[f64]) -> StatsResult<f64> {
    BatchedReducer::default().reduce(data, Extremum::Max)
}

/// Minimum over `k` values drawn with replacement (all of `data` when `k >= len`).
///
/// # Errors
/// Returns [`StatsError::EmptySequence`] if the sampled sequence is empty.
pub fn min_sampled<R: Rng>(data: &[f64], k: usize, rng: &mut R) -> StatsResult<f64> {
    min(&sample(data, k, rng))
}

/// Maximum over `k` values drawn with replacement (all of `data` when `k >= len`).
///
/// # Errors
/// Returns [`StatsError::EmptySequence`] if the sampled sequence is empty.
pub fn max_sampled<R: Rng>(data: &[f64], k: usize, rng: &mut R) -> StatsResult<f64> {
    max(&sample(data, k, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn scan(data: &[f64], op: Extremum) -> f64 {
        let mut acc = data[0];
        for &x in &data[1..] {
            acc = match op {
                Extremum::Min => acc.min(x),
                Extremum::Max => acc.max(x),
            };
        }
        acc
    }

    #[test]
    fn test_small_sequences() {
        assert_eq!(max(&[1.0, 2.0, 3.0]).unwrap(), 3.0);
        assert_eq!(max(&[-1.0, -2.0, -3.0]).unwrap(), -1.0);
        assert_eq!(min(&[1.0, 2.0, 3.0]).unwrap(), 1.0);
        assert_eq!(min(&[-1.0, 0.0, 1.0]).unwrap(), -1.0);
        assert_eq!(min(&[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_signed_zero_is_order_independent() {
        for data in [[0.0, -0.0], [-0.0, 0.0]] {
            assert!(min(&data).unwrap().is_sign_negative());
            assert!(max(&data).unwrap().is_sign_positive());
        }
        let reducer = BatchedReducer::new(1).unwrap();
        assert!(reducer
            .reduce(&[0.0, -0.0, 0.0], Extremum::Min)
            .unwrap()
            .is_sign_negative());
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(
            min(&[]),
            Err(StatsError::EmptySequence { operation: "min" })
        );
        assert_eq!(
            max(&[]),
            Err(StatsError::EmptySequence { operation: "max" })
        );
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert_eq!(BatchedReducer::new(0), Err(StatsError::InvalidChunkSize));
        assert_eq!(BatchedReducer::default().chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_larger_than_one_chunk() {
        let mut rng = create_rng(2013);
        let data: Vec<f64> = (0..250_000)
            .map(|_| rng.random_range(0.0..100_000.0))
            .collect();

        let hi = max(&data).unwrap();
        let lo = min(&data).unwrap();
        assert_eq!(hi, scan(&data, Extremum::Max));
        assert_eq!(lo, scan(&data, Extremum::Min));
        assert!((99_990.0..100_000.0).contains(&hi), "max {hi}");
        assert!((0.0..10.0).contains(&lo), "min {lo}");
    }

    #[test]
    fn test_extremum_in_last_partial_chunk() {
        let mut data = vec![0.0; DEFAULT_CHUNK_SIZE * 2 + 7];
        let last = data.len() - 1;
        data[last] = 5.0;
        data[DEFAULT_CHUNK_SIZE] = -5.0;
        assert_eq!(max(&data).unwrap(), 5.0);
        assert_eq!(min(&data).unwrap(), -5.0);
    }

    #[test]
    fn test_exact_multiple_of_chunk_size() {
        let reducer = BatchedReducer::new(4).unwrap();
        let data = [1.0, 2.0, 3.0, 4.0, 8.0, 7.0, 6.0, 5.0];
        assert_eq!(reducer.reduce(&data, Extremum::Max).unwrap(), 8.0);
        assert_eq!(reducer.reduce(&data, Extremum::Min).unwrap(), 1.0);
    }

    #[test]
    fn test_nan_propagates() {
        let reducer = BatchedReducer::new(2).unwrap();
        let data = [1.0, 2.0, f64::NAN, 4.0, 5.0];
        assert!(reducer.reduce(&data, Extremum::Max).unwrap().is_nan());
        assert!(reducer.reduce(&data, Extremum::Min).unwrap().is_nan());
    }

    #[test]
    fn test_infinities() {
        let data = [1.0, f64::INFINITY, f64::NEG_INFINITY];
        assert_eq!(max(&data).unwrap(), f64::INFINITY);
        assert_eq!(min(&data).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_sampled_extrema_bounded_by_full() {
        let data: Vec<f64> = (0..1000).map(f64::from).collect();
        let mut rng = create_rng(8);
        let hi = max_sampled(&data, 50, &mut rng).unwrap();
        let lo = min_sampled(&data, 50, &mut rng).unwrap();
        assert!(hi <= 999.0 && data.contains(&hi));
        assert!(lo >= 0.0 && data.contains(&lo));
        assert!(lo <= hi);
    }

    #[test]
    fn test_sampled_extrema_full_when_k_large() {
        let data = [4.0, -2.0, 9.0];
        let mut rng = create_rng(8);
        assert_eq!(max_sampled(&data, 3, &mut rng).unwrap(), 9.0);
        assert_eq!(min_sampled(&data, 10, &mut rng).unwrap(), -2.0);
        assert!(max_sampled(&data, 0, &mut rng).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn chunked_equals_single_pass(
            data in proptest::collection::vec(-1e9_f64..1e9, 1..300),
            chunk_size in 1_usize..64,
        ) {
            let reducer = BatchedReducer::new(chunk_size).unwrap();
            let single = BatchedReducer::new(data.len()).unwrap();
            for op in [Extremum::Min, Extremum::Max] {
                prop_assert_eq!(reducer.reduce(&data, op).unwrap(), single.reduce(&data, op).unwrap());
            }
        }

        #[test]
        fn min_le_every_element_le_max(
            data in proptest::collection::vec(-1e9_f64..1e9, 1..300),
        ) {
            let lo = min(&data).unwrap();
            let hi = max(&data).unwrap();
            prop_assert!(data.iter().all(|&x| lo <= x && x <= hi));
            prop_assert!(data.contains(&lo) && data.contains(&hi));
        }
    }
}
