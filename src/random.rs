//! Random number generation and with-replacement sampling.
//!
//! Provides seeded RNG construction, the sampler that every "optional
//! sampling" statistic is built on, and two small generators: a uniform
//! value in a range and a normal variate via the Marsaglia polar method.
//!
//! # Reproducibility
//!
//! Every function that draws takes the RNG explicitly. For reproducible
//! results, use [`create_rng`] with a fixed seed.

use std::borrow::Cow;

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++). The sequence is deterministic for a
/// given seed on the same platform.
///
/// # Examples
/// ```
/// use u_quickstats::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// How many elements an aggregation should look at.
///
/// `Samples(k)` only ever narrows: when `k` is not strictly less than the
/// sequence length the full sequence is used and no randomness is consumed.
///
/// # Examples
/// ```
/// use u_quickstats::random::SampleSpec;
/// assert_eq!(SampleSpec::Samples(10).draws(100), Some(10));
/// assert_eq!(SampleSpec::Samples(100).draws(100), None);
/// assert_eq!(SampleSpec::Full.draws(100), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSpec {
    /// Use every element.
    #[default]
    Full,
    /// Draw this many elements with replacement.
    Samples(usize),
}

impl SampleSpec {
    /// Returns the number of draws to make over a sequence of length `len`,
    /// or `None` when the full sequence should be used.
    pub fn draws(self, len: usize) -> Option<usize> {
        match self {
            SampleSpec::Samples(k) if k < len => Some(k),
            _ => None,
        }
    }

    /// Narrows `data` according to this rule; see [`sample`].
    pub fn apply<'a, T: Clone, R: Rng>(self, data: &'a [T], rng: &mut R) -> Cow<'a, [T]> {
        match self.draws(data.len()) {
            Some(k) => Cow::Owned(draw(data, k, rng)),
            None => Cow::Borrowed(data),
        }
    }
}

impl From<usize> for SampleSpec {
    fn from(k: usize) -> Self {
        SampleSpec::Samples(k)
    }
}

impl From<Option<usize>> for SampleSpec {
    fn from(k: Option<usize>) -> Self {
        k.map_or(SampleSpec::Full, SampleSpec::Samples)
    }
}

/// Draws `k` elements from `data` uniformly at random, with replacement.
///
/// Duplicates are expected; this is an approximation device, not a
/// partition. When `k >= data.len()` sampling is skipped and `data` itself
/// is returned borrowed, in its original order. `k == 0` on a non-empty
/// slice yields an empty sample.
///
/// # Complexity
/// Time: O(k), Space: O(k) (one allocation, sized up front)
///
/// # Examples
/// ```
/// use std::borrow::Cow;
/// use u_quickstats::random::{create_rng, sample};
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut rng = create_rng(42);
///
/// let s = sample(&data, 3, &mut rng);
/// assert_eq!(s.len(), 3);
/// assert!(s.iter().all(|x| data.contains(x)));
///
/// assert!(matches!(sample(&data, 5, &mut rng), Cow::Borrowed(_)));
/// ```
pub fn sample<'a, T: Clone, R: Rng>(data: &'a [T], k: usize, rng: &mut R) -> Cow<'a, [T]> {
    SampleSpec::Samples(k).apply(data, rng)
}

fn draw<T: Clone, R: Rng>(data: &[T], k: usize, rng: &mut R) -> Vec<T> {
    tracing::trace!(len = data.len(), k, "drawing with replacement");
    let n = data.len();
    let mut drawn = Vec::with_capacity(k);
    drawn.extend((0..k).map(|_| data[rng.random_range(0..n)].clone()));
    drawn
}

/// Most decimal places [`random_between`] rounds to.
pub const MAX_DIGITS: u32 = 100;

/// Returns a uniform value in `[low, high)` rounded to `digits` decimal places.
///
/// With `digits == 0` the result is a whole number. Rounding happens after
/// the draw, so a value just below `high` may round up to `high` itself.
/// `digits` is capped at [`MAX_DIGITS`]; when the scaled value overflows the
/// draw is returned unrounded.
///
/// # Examples
/// ```
/// use u_quickstats::random::{create_rng, random_between};
/// let mut rng = create_rng(7);
/// let x = random_between(10.0, 20.0, 2, &mut rng);
/// assert!((10.0..=20.0).contains(&x));
/// assert!((x * 100.0 - (x * 100.0).round()).abs() < 1e-9);
/// ```
pub fn random_between<R: Rng>(low: f64, high: f64, digits: u32, rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    let x = low + u * (high - low);
    let scale = 10_f64.powi(digits.min(MAX_DIGITS) as i32);
    let scaled = x * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        x
    }
}

/// Draws from N(mean, std_dev²) using the Marsaglia polar method.
///
/// # Algorithm
/// Draw `u, v` uniformly from `[-1, 1)` until `s = u² + v²` lies in
/// `(0, 1)`, then return `mean + std_dev · u · √(−2 ln s / s)`.
///
/// Reference: Marsaglia & Bray (1964), "A Convenient Method for Generating
/// Normal Variables", *SIAM Review* 6(3).
///
/// # Termination
/// Each round is accepted with probability π/4, so the loop ends almost
/// surely. Non-termination requires an infinite run of rejections and is
/// only a theoretical risk.
///
/// Independent of [`inverse_normal_cdf`](crate::special::inverse_normal_cdf).
///
/// # Examples
/// ```
/// use u_quickstats::random::{create_rng, normal_variate};
/// let mut rng = create_rng(42);
/// let x = normal_variate(100.0, 15.0, &mut rng);
/// assert!(x.is_finite());
/// ```
pub fn normal_variate<R: Rng>(mean: f64, std_dev: f64, rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.random_range(-1.0..1.0);
        let v: f64 = rng.random_range(-1.0..1.0);
        let s = u * u + v * v;
        if s > 0.0 && s < 1.0 {
            return mean + std_dev * u * (-2.0 * s.ln() / s).sqrt();
        }
    }
}

/// Draws from the standard normal N(0, 1). See [`normal_variate`].
pub fn standard_normal_variate<R: Rng>(rng: &mut R) -> f64 {
    normal_variate(0.0, 1.0, rng)
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn sample_length_is_min_of_k_and_len(
            seed in 0_u64..10000,
            data in proptest::collection::vec(-1000_i32..1000, 0..60),
            k in 0_usize..80,
        ) {
            let mut rng = create_rng(seed);
            let s = sample(&data, k, &mut rng);
            if k < data.len() {
                prop_assert_eq!(s.len(), k);
                prop_assert!(s.iter().all(|x| data.contains(x)));
            } else {
                prop_assert_eq!(&s[..], &data[..]);
            }
        }

        #[test]
        fn normal_variate_is_finite(seed in 0_u64..10000) {
            let mut rng = create_rng(seed);
            prop_assert!(standard_normal_variate(&mut rng).is_finite());
        }
    }
}
