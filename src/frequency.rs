//! Frequency counting: value histograms and per-kind tallies.
//!
//! Both functions return a `BTreeMap`, so iteration is ordered by key.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rand::Rng;

use crate::random::sample;
use crate::scalar::{Kind, Scalar};

/// A histogram key: an `f64` with a total order.
///
/// `-0.0` shares a bucket with `0.0`, and every NaN shares one bucket,
/// which sorts after `+∞`.
#[derive(Debug, Clone, Copy)]
pub struct Bucket(f64);

impl Bucket {
    pub fn new(x: f64) -> Self {
        if x.is_nan() {
            Bucket(f64::NAN)
        } else if x == 0.0 {
            Bucket(0.0)
        } else {
            Bucket(x)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Bucket {
    fn from(x: f64) -> Self {
        Bucket::new(x)
    }
}

impl PartialEq for Bucket {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bucket {}

impl PartialOrd for Bucket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bucket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Counts how many times each distinct value occurs.
///
/// The counts sum to `data.len()`.
///
/// # Examples
/// ```
/// use u_quickstats::frequency::{histogram, Bucket};
/// let h = histogram(&[1.0, 2.0, 2.0, 3.0]);
/// assert_eq!(h[&Bucket::new(2.0)], 2);
/// assert_eq!(h.len(), 3);
/// ```
pub fn histogram(data: &[f64]) -> BTreeMap<Bucket, usize> {
    let mut counts = BTreeMap::new();
    for &x in data {
        *counts.entry(Bucket::new(x)).or_insert(0) += 1;
    }
    counts
}

/// [`histogram`] over `k` values drawn with replacement.
pub fn histogram_sampled<R: Rng>(data: &[f64], k: usize, rng: &mut R) -> BTreeMap<Bucket, usize> {
    histogram(&sample(data, k, rng))
}

/// Counts elements by [`Kind`].
///
/// # Examples
/// ```
/// use u_quickstats::frequency::count_by_type;
/// use u_quickstats::scalar::{Kind, Value};
/// let data = [Value::from(1.0), Value::from("a"), Value::from(2.0)];
/// let counts = count_by_type(&data);
/// assert_eq!(counts[&Kind::Number], 2);
/// assert_eq!(counts[&Kind::String], 1);
/// ```
pub fn count_by_type<T: Scalar>(data: &[T]) -> BTreeMap<Kind, usize> {
    let mut counts = BTreeMap::new();
    for x in data {
        *counts.entry(x.kind()).or_insert(0) += 1;
    }
    counts
}

/// [`count_by_type`] over `k` elements drawn with replacement.
pub fn count_by_type_sampled<T: Scalar + Clone, R: Rng>(
    data: &[T],
    k: usize,
    rng: &mut R,
) -> BTreeMap<Kind, usize> {
    count_by_type(&sample(data, k, rng))
}
