//! Standard normal quantile and distribution functions.
//!
//! [`inverse_normal_cdf`] is the quantile function Φ⁻¹ used for z-scores.
//! [`standard_normal_cdf`] is its companion Φ, accurate enough to check
//! the quantile by round trip.

use crate::error::{StatsError, StatsResult};

// Acklam's coefficients. Central region: A (numerator), B (denominator),
// both in r = (p − ½)². Tails: C (numerator), D (denominator) in
// q = √(−2 ln p) or √(−2 ln(1 − p)). Denominators carry an implicit
// trailing coefficient of 1.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239e0,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838e0,
    -2.549_732_539_343_734e0,
    4.374_664_141_464_968e0,
    2.938_163_982_698_783e0,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996e0,
    3.754_408_661_907_416e0,
];

/// Lower breakpoint between the tail and central approximations.
const P_LOW: f64 = 0.02425;
/// Upper breakpoint, `1 − P_LOW`.
const P_HIGH: f64 = 1.0 - P_LOW;

/// Horner evaluation, highest-order coefficient first.
#[inline]
fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Lower-tail rational function `C(q) / (D(q)·q + 1)`.
#[inline]
fn tail(q: f64) -> f64 {
    horner(&C, q) / (horner(&D, q) * q + 1.0)
}

/// Inverse of the standard normal CDF (quantile function).
///
/// Given `p ∈ (0, 1)`, returns `z` such that `Φ(z) = p`.
///
/// # Algorithm
/// Peter J. Acklam's piecewise rational approximation:
///
/// | Region | Variable | Value |
/// |---|---|---|
/// | `p < 0.02425` | `q = √(−2 ln p)` | `C(q) / D(q)` |
/// | `0.02425 ≤ p ≤ 0.97575` | `q = p − ½`, `r = q²` | `q · A(r) / B(r)` |
/// | `p > 0.97575` | `q = √(−2 ln(1 − p))` | `−C(q) / D(q)` |
///
/// Reference: Acklam (2003), "An algorithm for computing the inverse
/// normal cumulative distribution function".
///
/// # Accuracy
/// Relative error below 1.15 × 10⁻⁹ over the whole domain.
///
/// # Errors
/// Returns [`StatsError::ProbabilityOutOfDomain`] if `p` is NaN or outside
/// the open interval `(0, 1)`. The endpoints have no finite quantile.
///
/// # Examples
/// ```
/// use u_quickstats::special::inverse_normal_cdf;
/// let z = inverse_normal_cdf(0.65).unwrap();
/// assert_eq!((z * 1000.0).round() / 1000.0, 0.385);
/// assert!((inverse_normal_cdf(0.975).unwrap() - 1.959963984540054).abs() < 1e-8);
/// assert!(inverse_normal_cdf(1.0).is_err());
/// ```
pub fn inverse_normal_cdf(p: f64) -> StatsResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(StatsError::ProbabilityOutOfDomain(p));
    }

    let z = if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p > P_HIGH {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        horner(&A, r) * q / (horner(&B, r) * r + 1.0)
    };
    Ok(z)
}

/// Approximation of the standard normal CDF Φ(x) = P(Z ≤ x).
///
/// # Algorithm
/// Abramowitz & Stegun formula 26.2.17, with `t = 1 / (1 + 0.2316419·|x|)`
/// and Φ(−x) = 1 − Φ(x) for negative arguments.
///
/// # Accuracy
/// Maximum absolute error < 7.5 × 10⁻⁸.
///
/// # Examples
/// ```
/// use u_quickstats::special::standard_normal_cdf;
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
/// ```
pub fn standard_normal_cdf(x: f64) -> f64 {
    const P: f64 = 0.231_641_9;
    const BS: [f64; 5] = [
        1.330_274_429,
        -1.821_255_978,
        1.781_477_937,
        -0.356_563_782,
        0.319_381_530,
    ];
    const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() {
        return if x > 0.0 { 1.0 } else { 0.0 };
    }

    let ax = x.abs();
    let t = 1.0 / (1.0 + P * ax);
    let density = FRAC_1_SQRT_2PI * (-0.5 * ax * ax).exp();
    let upper = density * t * horner(&BS, t);
    if x >= 0.0 {
        1.0 - upper
    } else {
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(p: f64) -> f64 {
        inverse_normal_cdf(p).unwrap()
    }

    #[test]
    fn test_inverse_reference_value() {
        assert_eq!((z(0.65) * 1000.0).round() / 1000.0, 0.385);
    }

    #[test]
    fn test_inverse_center_is_zero() {
        assert_eq!(z(0.5), 0.0);
    }

    #[test]
    fn test_inverse_known_quantiles() {
        let cases = [
            (0.9, 1.281_551_565_544_600_4),
            (0.975, 1.959_963_984_540_054),
            (0.025, -1.959_963_984_540_054),
            (0.02, -2.053_748_910_631_823),
            (0.01, -2.326_347_874_040_841),
            (0.999, 3.090_232_306_167_813_5),
        ];
        for (p, expected) in cases {
            let got = z(p);
            assert!(
                (got - expected).abs() < 1e-8,
                "Φ⁻¹({p}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_inverse_deep_tail() {
        let expected = -6.361_340_902_404_056;
        let got = z(1e-10);
        assert!((got - expected).abs() < 1e-7 * expected.abs(), "got {got}");
        assert!((z(1.0 - 1e-10) + got).abs() < 1e-5);
    }

    #[test]
    fn test_inverse_region_sign() {
        assert!(z(0.001) < 0.0);
        assert!(z(0.3) < 0.0);
        assert!(z(0.7) > 0.0);
        assert!(z(0.999) > 0.0);
    }

    #[test]
    fn test_inverse_continuous_at_breakpoints() {
        for bp in [P_LOW, P_HIGH] {
            let below = z(bp - 1e-12);
            let above = z(bp + 1e-12);
            assert!((above - below).abs() < 1e-8, "jump at {bp}");
        }
    }

    #[test]
    fn test_inverse_out_of_domain() {
        for p in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    inverse_normal_cdf(p),
                    Err(StatsError::ProbabilityOutOfDomain(_))
                ),
                "p = {p} should be rejected"
            );
        }
    }

    #[test]
    fn test_cdf_symmetry_and_limits() {
        assert!((standard_normal_cdf(1.0) + standard_normal_cdf(-1.0) - 1.0).abs() < 1e-12);
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert!(standard_normal_cdf(f64::NAN).is_nan());
        assert!((standard_normal_cdf(1.959_963_984_540_054) - 0.975).abs() < 1e-7);
    }

    #[test]
    fn test_round_trip() {
        for i in 1..1000 {
            let p = i as f64 / 1000.0;
            let back = standard_normal_cdf(z(p));
            assert!((back - p).abs() < 2e-7, "Φ(Φ⁻¹({p})) = {back}");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn inverse_is_monotonic(p in 1e-12_f64..0.99, step in 1e-6_f64..0.01) {
            prop_assert!(z_of(p) < z_of(p + step));
        }

        #[test]
        fn inverse_is_antisymmetric(p in 1e-6_f64..0.999_999) {
            let lhs = z_of(p);
            let rhs = -z_of(1.0 - p);
            prop_assert!((lhs - rhs).abs() < 1e-8 * lhs.abs().max(1.0));
        }
    }

    fn z_of(p: f64) -> f64 {
        inverse_normal_cdf(p).unwrap()
    }
}
