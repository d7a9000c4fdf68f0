//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationConfig`] and its builder. Path count
//! controls statistical noise (∝ 1/√M); step count controls how finely
//! each path is monitored for barriers and averaged for Asian payoffs.

use super::error::ConfigError;

/// Maximum number of simulation paths.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps per path.
pub const MAX_STEPS: usize = 10_000;

/// Validated Monte Carlo configuration.
///
/// # Example
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Validated configuration without a seed.
    ///
    /// # Errors
    /// Same as [`SimulationConfigBuilder::build`].
    pub fn new(n_paths: usize, n_steps: usize) -> Result<Self, ConfigError> {
        Self::builder().n_paths(n_paths).n_steps(n_steps).build()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the seed, if one was fixed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidPathCount` if `n_paths` is 0 or exceeds [`MAX_PATHS`]
    /// - `ConfigError::InvalidStepCount` if `n_steps` is 0 or exceeds [`MAX_STEPS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Fixes the random seed for reproducible runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidParameter` if paths or steps were not set
    /// - `ConfigError::InvalidPathCount` / `InvalidStepCount` if out of range
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
