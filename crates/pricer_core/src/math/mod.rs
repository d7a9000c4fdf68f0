//! Numerical building blocks shared by the pricing layers.
//!
//! - [`solvers`]: Bounded Newton-Raphson root finding
//! - [`statistics`]: Sample moments and interpolated percentiles

pub mod solvers;
pub mod statistics;
