//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Standard normal CDF, PDF and quantile function
//! - Black-Scholes-Merton price with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Implied volatility inversion
//!
//! ## Design Principles
//!
//! - **Total functions**: degenerate contracts fall back to intrinsic value
//!   or zero instead of failing
//! - **Quoting conventions**: vega and rho per 1%, theta per calendar day

pub mod black_scholes;
pub mod distributions;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_inv_cdf, norm_pdf};
pub use implied_vol::{implied_volatility, implied_volatility_detailed, ImpliedVolResult};
