//! # Pricer Models (L2: Analytical Engine)
//!
//! Closed-form European option pricing under Black-Scholes dynamics.
//!
//! This crate provides:
//! - Standard normal distribution functions (CDF, PDF, inverse CDF)
//! - Black-Scholes prices and Greeks with a continuous dividend yield
//! - Newton-Raphson implied volatility inversion
//!
//! ## Design Principles
//!
//! - **Total functions**: degenerate contracts fall back to intrinsic value
//!   or zero sensitivities instead of signalling errors
//! - **Host conventions**: vega and rho are quoted per 1-point move,
//!   theta per calendar day

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
