//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use num_traits::Float;

/// Reason a bounded Newton iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `|f(x)|` fell below the configured tolerance.
    Converged,
    /// `|f'(x)|` fell below the derivative tolerance; no step was taken.
    FlatDerivative,
    /// The iteration cap was reached.
    MaxIterations,
}

/// Outcome of a bounded Newton iteration.
///
/// A bounded iteration never fails: the best iterate reached is always
/// reported, together with why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedRoot<T: Float> {
    /// Final iterate, always inside `[lower, upper]` unless it is the starting guess.
    pub root: T,
    /// Number of function evaluations performed.
    pub iterations: usize,
    /// Why the iteration stopped.
    pub termination: Termination,
}

impl<T: Float> BoundedRoot<T> {
    /// Returns true if the residual tolerance was met.
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root. It may stall if:
/// - The derivative is near zero
/// - The initial guess is far from the root
/// - The function has discontinuities
///
/// Clamping every iterate into a fixed interval keeps the search inside the
/// domain where `f` is meaningful.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0
/// let f = |x: f64| x * x * x - x - 2.0;
/// let f_prime = |x: f64| 3.0 * x * x - 1.0;
///
/// let outcome = solver.find_root_bounded(f, f_prime, 1.5, -10.0, 10.0);
/// assert!(outcome.converged());
/// assert!(f(outcome.root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` inside `[lower, upper]` using explicit derivative `f_prime`.
    ///
    /// Each iteration evaluates `f(x)` and `f'(x)`, stops if `|f(x)|` is
    /// within tolerance or `|f'(x)|` is too small to make progress, and
    /// otherwise takes the Newton step and clamps the result into
    /// `[lower, upper]`. A non-finite step lands on `lower`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    /// * `lower` - Lower clamp for iterates
    /// * `upper` - Upper clamp for iterates
    ///
    /// # Returns
    ///
    /// The final iterate and the reason the loop ended. This method never
    /// fails; callers inspect [`BoundedRoot::termination`] when strict
    /// convergence matters.
    pub fn find_root_bounded<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        lower: T,
        upper: T,
    ) -> BoundedRoot<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);
            let f_prime_val = f_prime(x);

            if f_val.abs() < self.config.tolerance {
                return BoundedRoot {
                    root: x,
                    iterations: iteration + 1,
                    termination: Termination::Converged,
                };
            }

            if f_prime_val.abs() < self.config.derivative_tolerance {
                return BoundedRoot {
                    root: x,
                    iterations: iteration + 1,
                    termination: Termination::FlatDerivative,
                };
            }

            x = clamp(x - f_val / f_prime_val, lower, upper);
        }

        BoundedRoot {
            root: x,
            iterations: self.config.max_iterations,
            termination: Termination::MaxIterations,
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

/// Clamps `x` into `[lower, upper]`, sending NaN to `lower`.
#[inline]
fn clamp<T: Float>(x: T, lower: T, upper: T) -> T {
    if x > upper {
        upper
    } else if x > lower {
        x
    } else {
        lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let outcome = solver.find_root_bounded(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0, 0.0, 10.0);
        assert!(outcome.converged());
        assert!(
            (outcome.root - std::f64::consts::SQRT_2).abs() < 1e-10,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            outcome.root
        );
    }

    #[test]
    fn test_iterate_is_clamped() {
        // Root at 5.0 lies outside [0, 2]; every iterate pins to the upper bound.
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 10, 1e-10));
        let outcome = solver.find_root_bounded(|x: f64| x - 5.0, |_| 1.0, 1.0, 0.0, 2.0);
        assert_eq!(outcome.termination, Termination::MaxIterations);
        assert_eq!(outcome.root, 2.0);
        assert_eq!(outcome.iterations, 10);
    }

    #[test]
    fn test_flat_derivative_reports_current_iterate() {
        let solver = NewtonRaphsonSolver::with_defaults();
        let outcome = solver.find_root_bounded(|_x: f64| 1.0, |_| 0.0, 0.3, 0.0, 1.0);
        assert_eq!(outcome.termination, Termination::FlatDerivative);
        assert_eq!(outcome.root, 0.3);
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_converged_at_initial_guess() {
        let solver = NewtonRaphsonSolver::with_defaults();
        let outcome = solver.find_root_bounded(|x: f64| x - 0.2, |_| 1.0, 0.2, 0.0, 1.0);
        assert!(outcome.converged());
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_nan_step_lands_on_lower_bound() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 1, 1e-10));
        let outcome = solver.find_root_bounded(|_x: f64| f64::NAN, |_| 1.0, 0.5, 0.001, 20.0);
        assert_eq!(outcome.root, 0.001);
    }

    #[test]
    fn test_clamp_helper() {
        assert_eq!(clamp(5.0_f64, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0_f64, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5_f64, 0.0, 1.0), 0.5);
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
    }
}
