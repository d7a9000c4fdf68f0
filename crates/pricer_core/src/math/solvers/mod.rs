//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Quadratic convergence using explicit derivatives,
//!   with every iterate clamped into a caller-supplied interval
//!
//! ## Configuration
//!
//! [`SolverConfig`] controls:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `derivative_tolerance`: Derivative magnitude below which iteration stops (default: 1e-10)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, Termination};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let outcome = solver.find_root_bounded(f, f_prime, 1.0, 0.0, 4.0);
//! assert_eq!(outcome.termination, Termination::Converged);
//! assert!((outcome.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

// Re-export public types at module level
pub use config::SolverConfig;
pub use newton_raphson::{BoundedRoot, NewtonRaphsonSolver, Termination};
