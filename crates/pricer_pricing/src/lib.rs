//! # Pricer Pricing (L3: Simulation Engine)
//!
//! Path simulation and Monte Carlo option pricing.
//!
//! This crate provides:
//! - A seeded pseudo-random normal source and a per-thread generator
//! - Log-Euler geometric Brownian motion stepping
//! - Monte Carlo pricing of vanilla, Asian and up-and-out barrier payoffs
//! - Real-world terminal-price buffers and their distribution summary
//!
//! The engine is independent of the closed-form models; it depends only on
//! the foundation types in `pricer_core`.
//!
//! ## Randomness
//!
//! Every simulation routine takes its randomness as an explicit
//! [`rng::NormalSource`] parameter. Deterministic tests inject a seeded
//! [`rng::PricerRng`]; hosts that want per-thread entropy use
//! [`rng::with_thread_rng`].
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionContract;
//! use pricer_pricing::mc::{BarrierSpec, MonteCarloPricer, PayoffKind, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config);
//! let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
//! let result = pricer.simulate_option(&contract, PayoffKind::Put, BarrierSpec::none());
//!
//! assert!(result.price > 0.0);
//! assert!(result.std_error > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
