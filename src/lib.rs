//! # u-quickstats
//!
//! Quick descriptive statistics for the U-Engine ecosystem.
//!
//! This crate provides central tendency, dispersion, order statistics, and
//! the standard normal quantile over plain slices, with optional
//! sampling-based approximation for large inputs. It is a lightweight
//! utility layer, not a full numerics stack.
//!
//! ## Modules
//!
//! - [`stats`] — Sum, mean, variance, standard deviation, median, percentile
//! - [`reduce`] — Chunked minimum and maximum
//! - [`random`] — Seeded RNGs, with-replacement sampling, normal variates
//! - [`special`] — Inverse standard normal CDF (Acklam) and its companion CDF
//! - [`frequency`] — Histograms and per-kind tallies
//! - [`scalar`] — Numeric coercion of sequence elements
//! - [`integer`] — Parity, factorial, product
//! - [`error`] — Error type shared by all modules
//!
//! ## Design Philosophy
//!
//! - **Free functions over slices**: the sequence is always the first argument
//! - **Sampling only narrows**: a sample count at or above the length means
//!   "use everything"
//! - **Fail fast on domain errors**: empty reductions, out-of-range
//!   percentiles, and probabilities outside `(0, 1)` are errors, while
//!   degenerate moments follow IEEE 754
//! - **Explicit randomness**: every draw goes through a caller-supplied RNG
//!
//! ## Example
//!
//! ```
//! use u_quickstats::random::create_rng;
//! use u_quickstats::stats::{mean, median, percentile, std_dev_sampled};
//! use u_quickstats::reduce::max;
//!
//! let mut data: Vec<f64> = (1..=10).map(f64::from).collect();
//! assert_eq!(mean(&data), 5.5);
//! assert_eq!(max(&data).unwrap(), 10.0);
//!
//! let mut rng = create_rng(42);
//! let sd = std_dev_sampled(&data, 5, &mut rng);
//! assert!(sd >= 0.0);
//!
//! assert_eq!(median(&mut data).unwrap(), 5.5);
//! assert_eq!(percentile(&mut data, 0.25).unwrap(), 3.0);
//! ```

pub mod error;
pub mod frequency;
pub mod integer;
pub mod random;
pub mod reduce;
pub mod scalar;
pub mod special;
pub mod stats;

pub use error::{StatsError, StatsResult};
