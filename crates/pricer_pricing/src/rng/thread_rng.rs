//! Per-thread generator for callers that do not inject their own source.
//!
//! Each thread lazily creates one [`PricerRng`] from operating-system
//! entropy on first use and keeps it for the thread's lifetime. Generators
//! are never shared across threads, so concurrent callers need no locking.

use std::cell::RefCell;

use super::PricerRng;

thread_local! {
    static THREAD_RNG: RefCell<Option<PricerRng>> = const { RefCell::new(None) };
}

/// Executes a closure with the calling thread's generator.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f` on the same thread.
///
/// # Example
///
/// ```rust
/// use pricer_pricing::rng::{with_thread_rng, NormalSource};
///
/// let z = with_thread_rng(|rng| rng.gen_normal());
/// assert!(z.is_finite());
/// ```
pub fn with_thread_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut PricerRng) -> R,
{
    THREAD_RNG.with(|cell| {
        let mut slot = cell.borrow_mut();
        let rng = slot.get_or_insert_with(|| {
            let rng = PricerRng::from_entropy();
            tracing::debug!(
                seed = rng.seed(),
                thread = ?std::thread::current().id(),
                "seeded thread-local generator"
            );
            rng
        });
        f(rng)
    })
}

/// Returns the seed of the calling thread's generator, creating it if needed.
pub fn thread_rng_seed() -> u64 {
    with_thread_rng(|rng| rng.seed())
}
