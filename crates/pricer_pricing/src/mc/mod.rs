//! # Monte Carlo Engine
//!
//! Risk-neutral GBM simulation for vanilla, Asian and up-and-out barrier
//! payoffs, plus real-world terminal-price generation for scenario analysis.
//!
//! ## Module Structure
//!
//! - [`config`]: validated path/step counts and optional seed
//! - [`paths`]: log-Euler GBM stepping and terminal-price buffers
//! - [`payoff`]: payoff kinds and barrier levels
//! - [`pricer`]: path loop, knockout handling and aggregation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionContract;
//! use pricer_pricing::mc::{simulate_option, BarrierSpec, PayoffKind};
//! use pricer_pricing::rng::PricerRng;
//!
//! let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
//! let mut rng = PricerRng::from_seed(2024);
//!
//! let knock_out = simulate_option(
//!     &contract,
//!     PayoffKind::BarrierUpAndOutCall,
//!     BarrierSpec::new(130.0),
//!     10_000,
//!     52,
//!     &mut rng,
//! );
//! assert!(knock_out.surviving_paths < 10_000);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use paths::{fill_terminal_prices, step, GbmStepper, TerminalDistribution};
pub use payoff::{BarrierSpec, PayoffKind};
pub use pricer::{simulate_option, MonteCarloPricer, PricingResult};
