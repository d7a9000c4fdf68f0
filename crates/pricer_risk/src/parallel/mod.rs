//! Rayon-based parallelisation utilities and book valuation.
//!
//! Small inputs are processed on the calling thread; above
//! [`ParallelConfig::parallel_threshold`] work is split across the Rayon
//! pool in chunks of at least [`ParallelConfig::batch_size`] items. Results
//! always come back in input order.

pub mod book;

pub use book::{
    simulate_book, value_book, BookSummary, BookValuation, Position, PositionValuation,
    SimulatedBook, SimulatedPosition,
};

use rayon::prelude::*;

/// Minimum number of items handed to one Rayon task.
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Item count from which work is spread over the Rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items per Rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Maps each item through `mapper`, in parallel when the input is large enough.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `config` - Threshold and batch size
/// * `mapper` - Function to apply to each item
///
/// # Returns
///
/// Mapped results in input order.
pub fn parallel_map<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    parallel_map_indexed(items, config, |_, item| mapper(item))
}

/// Same as [`parallel_map`] but also passes each item's index.
pub fn parallel_map_indexed<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .enumerate()
            .with_min_len(config.batch_size)
            .map(|(index, item)| mapper(index, item))
            .collect()
    } else {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| mapper(index, item))
            .collect()
    }
}

/// Parallel reduce over items.
///
/// # Arguments
///
/// * `items` - Slice of items to reduce
/// * `identity` - Identity value for reduction
/// * `mapper` - Function to extract value from item
/// * `reducer` - Associative reduction function
///
/// # Returns
///
/// Reduced value.
pub fn parallel_reduce<T, R, M, Red>(items: &[T], identity: R, mapper: M, reducer: Red) -> R
where
    T: Sync,
    R: Send + Sync + Copy,
    M: Fn(&T) -> R + Sync + Send,
    Red: Fn(R, R) -> R + Sync + Send,
{
    items.par_iter().map(mapper).reduce(|| identity, reducer)
}
