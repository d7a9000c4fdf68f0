//! # Pricer Kernel (Boundary)
//!
//! The flat call surface of quantkernel: plain `f64` scalars in, a plain
//! `f64` out, integer discriminators for option kinds, and a caller-owned
//! slice for bulk output.
//!
//! Every function here is total. Degenerate contracts fall back to
//! intrinsic value or zero, the implied-volatility solver returns its best
//! iterate, out-of-range counts and kind codes are absorbed by documented
//! defaults, and nothing panics on finite input.
//!
//! Random operations draw from the calling thread's generator
//! ([`pricer_pricing::rng::with_thread_rng`]), so concurrent hosts never
//! share generator state.
//!
//! ## Kind codes
//!
//! | Code | [`implied_volatility`] | [`simulate_option`] |
//! |------|------------------------|---------------------|
//! | 0    | call                   | call                |
//! | 1    | put (any non-zero)     | put                 |
//! | 2    |                        | asian call          |
//! | 3    |                        | asian put           |
//! | 4    |                        | barrier up-and-out call |
//!
//! ## Example
//!
//! ```
//! use pricer_kernel::{call_price, historical_var, implied_volatility, put_price};
//!
//! let call = call_price(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
//! let put = put_price(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
//! let parity = call + 100.0 * (-0.05_f64).exp() - put - 100.0;
//! assert!(parity.abs() < 1e-6);
//!
//! let sigma = implied_volatility(call, 100.0, 100.0, 1.0, 0.05, 0.0, 0);
//! assert!((sigma - 0.2).abs() < 1e-4);
//!
//! let returns = [-0.05, -0.02, 0.0, 0.01, 0.03];
//! assert_eq!(historical_var(&returns, 5, 0.8, 1), 0.02);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod analytical;
mod monte_carlo;
mod risk;

pub use analytical::{
    call_price, delta_call, delta_put, gamma, implied_volatility, put_price, rho_call, rho_put,
    theta_call, theta_put, vega,
};
pub use monte_carlo::{final_prices, simulate_option};
pub use risk::{historical_var, simulated_var};
