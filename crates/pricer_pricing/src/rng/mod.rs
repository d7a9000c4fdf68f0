//! # Random Number Generation Infrastructure
//!
//! Standard normal variates for the path simulator.
//!
//! ## Module Structure
//!
//! - [`NormalSource`]: the injection seam every simulation routine draws from
//! - [`PricerRng`]: seeded `StdRng` wrapper, the default source
//! - [`with_thread_rng`]: lazily created per-thread generator seeded from
//!   operating-system entropy
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, PricerRng};
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Any NormalSource works, including a borrowed one
//! fn draw<S: NormalSource>(mut source: S) -> f64 {
//!     source.gen_normal()
//! }
//! let z = draw(&mut rng);
//! assert!(z.is_finite());
//! ```

mod prng;
mod thread_rng;

pub use prng::PricerRng;
pub use thread_rng::{thread_rng_seed, with_thread_rng};

/// Source of independent standard normal draws.
pub trait NormalSource {
    /// Draws one standard normal variate (mean 0, variance 1).
    fn gen_normal(&mut self) -> f64;
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn gen_normal(&mut self) -> f64 {
        (**self).gen_normal()
    }
}
