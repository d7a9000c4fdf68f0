//! Descriptive statistics over `f64` samples.
//!
//! Empty samples never panic: moments of an empty sample are `0.0`, and the
//! percentile of an empty sample is `NaN`.

/// Arithmetic mean. Returns `0.0` for an empty sample.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (divisor `n − 1`). Returns `0.0` for fewer than two values.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::sample_std_dev;
///
/// let s = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((s - 2.138089935299395).abs() < 1e-12);
/// ```
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (n - 1) as f64).sqrt()
}

/// Sorts a sample ascending, ordering NaN after every number.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(f64::total_cmp);
}

/// Percentile `p ∈ [0, 100]` of an ascending-sorted sample.
///
/// Interpolates linearly between the order statistics at
/// `⌊i⌋` and `⌈i⌉` where `i = p/100 · (n − 1)`.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::percentile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile_sorted(&sorted, 50.0), 3.0);
/// assert_eq!(percentile_sorted(&sorted, 25.0), 2.0);
/// assert_eq!(percentile_sorted(&sorted, 12.5), 1.5);
/// ```
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let last = sorted.len() - 1;
    let position = (p.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lo = position.floor() as usize;
    let hi = (position.ceil() as usize).min(last);
    sorted[lo] + (position - lo as f64) * (sorted[hi] - sorted[lo])
}
