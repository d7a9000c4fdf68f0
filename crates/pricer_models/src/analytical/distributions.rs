//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_inv_cdf`: Quantile function (inverse CDF)
//!
//! All functions are generic over `T: Float` so that the same code serves
//! `f64` pricing and `f32` batch evaluation.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 26.2.17 coefficients b₁..b₅.
const AS_COEFFS: [f64; 5] = [
    0.319_381_530,
    -0.356_563_782,
    1.781_477_937,
    -1.821_255_978,
    1.330_274_429,
];

/// Abramowitz and Stegun 26.2.17 scale p.
const AS_P: f64 = 0.231_641_9;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) with the five-term polynomial of
/// Abramowitz and Stegun (formula 26.2.17), maximum absolute error 7.5e-8.
///
/// # Mathematical Definition
/// For x ≤ 0: Φ(x) = φ(x)·(b₁t + b₂t² + b₃t³ + b₄t⁴ + b₅t⁵), t = 1/(1 + p|x|)
///
/// For x > 0: Φ(x) = 1 − Φ(−x)
///
/// The origin returns exactly 0.5, removing the polynomial's residual there
/// so that Φ(x) + Φ(−x) = 1 holds for every finite x.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let zero = T::zero();
    if x == zero {
        return T::from(0.5).unwrap();
    }

    let one = T::one();
    let t = one / (one + T::from(AS_P).unwrap() * x.abs());

    // Horner's method for b₁t + ... + b₅t⁵
    let b = |i: usize| T::from(AS_COEFFS[i]).unwrap();
    let poly = t * (b(0) + t * (b(1) + t * (b(2) + t * (b(3) + t * b(4)))));

    let tail = norm_pdf(x) * poly;

    if x > zero {
        one - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
///
/// let pdf_1 = norm_pdf(1.0_f64);
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Inverse standard normal CDF (quantile function).
///
/// Beasley-Springer-Moro approximation: a rational function in the central
/// region `|p − 0.5| < 0.42` and a polynomial in `ln(−ln(p))` in the tails.
///
/// # Returns
/// - `-∞` for `p <= 0`
/// - `+∞` for `p >= 1`
/// - the approximate quantile otherwise (absolute error ~3e-9)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_inv_cdf;
///
/// assert!(norm_inv_cdf(0.5_f64).abs() < 1e-12);
/// assert!((norm_inv_cdf(0.975_f64) - 1.959963985).abs() < 1e-6);
/// ```
pub fn norm_inv_cdf<T: Float>(p: T) -> T {
    const A: [f64; 4] = [
        2.506_628_238_84,
        -18.615_000_625_29,
        41.391_197_735_34,
        -25.441_060_496_37,
    ];
    const B: [f64; 4] = [
        -8.473_510_930_90,
        23.083_367_437_43,
        -21.062_241_018_26,
        3.130_829_098_33,
    ];
    const C: [f64; 9] = [
        0.337_475_482_272_614_7,
        0.976_169_019_091_718_6,
        0.160_797_971_491_820_9,
        0.027_643_881_033_386_3,
        0.003_840_572_937_360_9,
        0.000_395_189_651_191_9,
        0.000_032_176_788_176_8,
        0.000_000_288_816_736_4,
        0.000_000_396_031_518_7,
    ];

    let zero = T::zero();
    let one = T::one();
    if p <= zero {
        return T::neg_infinity();
    }
    if p >= one {
        return T::infinity();
    }

    let c = |v: f64| T::from(v).unwrap();
    let y = p - c(0.5);

    if y.abs() < c(0.42) {
        let r = y * y;
        let num = y * (((c(A[3]) * r + c(A[2])) * r + c(A[1])) * r + c(A[0]));
        let den = (((c(B[3]) * r + c(B[2])) * r + c(B[1])) * r + c(B[0])) * r + one;
        return num / den;
    }

    let tail = if y < zero { p } else { one - p };
    let r = (-tail.ln()).ln();
    let mut x = c(C[8]);
    for &coeff in C[..8].iter().rev() {
        x = c(coeff) + r * x;
    }

    if y < zero {
        -x
    } else {
        x
    }
}
