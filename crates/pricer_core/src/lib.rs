//! # pricer_core: Foundation Layer for the Pricing Kernel
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the kernel, providing:
//! - Contract description: `OptionContract`, `OptionKind` (`types::contract`)
//! - Error types: `PricingError` (`types::error`)
//! - Bounded Newton-Raphson root finding (`math::solvers`)
//! - Descriptive statistics over samples (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//! use pricer_core::types::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
//! assert!(!contract.is_degenerate());
//! assert_eq!(OptionKind::try_from(1).unwrap(), OptionKind::Put);
//!
//! // Solve x² - 2 = 0 inside [0, 10]
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let outcome = solver.find_root_bounded(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0, 0.0, 10.0);
//! assert!((outcome.root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionContract` and `OptionKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
