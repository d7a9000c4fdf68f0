//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
///     derivative_tolerance: 1e-14,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,

    /// Derivative magnitude below which no further progress is attempted.
    ///
    /// The solver stops when `|f'(x)| < derivative_tolerance` and reports
    /// the iterate reached so far.
    pub derivative_tolerance: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    /// - `derivative_tolerance`: 1e-10
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
            derivative_tolerance: T::from(1e-10).unwrap(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    /// * `derivative_tolerance` - Flat-derivative threshold (must be non-negative)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`, `max_iterations == 0` or
    /// `derivative_tolerance < 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-8, 100, 1e-10);
    /// assert_eq!(config.max_iterations, 100);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize, derivative_tolerance: T) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        assert!(
            derivative_tolerance >= T::zero(),
            "derivative_tolerance must be non-negative"
        );
        Self {
            tolerance,
            max_iterations,
            derivative_tolerance,
        }
    }
}
