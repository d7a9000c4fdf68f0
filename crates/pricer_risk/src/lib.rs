//! # Pricer Risk (L4: Application)
//!
//! Market-risk measures and portfolio-level valuation.
//!
//! This crate provides:
//! - Historical, simulated and parametric Value-at-Risk
//! - Expected shortfall for each VaR method
//! - Rayon-parallel valuation of option books in closed form and by Monte Carlo
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  var/       - VaR and expected shortfall│
//! │  parallel/  - Rayon utilities, books    │
//! └─────────────────────────────────────────┘
//!          ↓                      ↓
//! ┌──────────────────┐  ┌──────────────────┐
//! │ pricer_models L2 │  │ pricer_pricing L3│
//! │ closed form      │  │ Monte Carlo, RNG │
//! └──────────────────┘  └──────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_risk::var::{historical_estimate, ReturnSeries, VarConfig};
//!
//! let series = ReturnSeries::new(vec![-0.05, -0.02, 0.0, 0.01, 0.03]).unwrap();
//! let config = VarConfig::new(0.8, 1).unwrap();
//!
//! let estimate = historical_estimate(&series, &config);
//! assert_eq!(estimate.var, 0.02);
//! assert!((estimate.expected_shortfall - 0.035).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod parallel;
pub mod var;
