//! CLI configuration management
//!
//! Settings come from four sources, highest priority first: command-line
//! flags, `QUANTKERNEL_*` environment variables, a TOML file, and built-in
//! defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{CliError, Result};

/// Default configuration file, read from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "quantkernel.toml";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "QUANTKERNEL_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_OUTPUT: &str = "QUANTKERNEL_OUTPUT";
/// Environment variable overriding the simulation seed.
pub const ENV_SEED: &str = "QUANTKERNEL_SEED";

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned key/value table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::Config(format!(
                "Invalid output format: {}. Must be one of: table, json",
                s
            ))),
        }
    }
}

/// `[simulation]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Monte Carlo paths per run
    pub paths: usize,
    /// Time steps per path
    pub steps: usize,
    /// Fixed seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            paths: 100_000,
            steps: 252,
            seed: None,
        }
    }
}

/// `[risk]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    /// VaR confidence level
    pub confidence: f64,
    /// VaR holding period in days
    pub horizon_days: u32,
    /// Draws for simulated VaR
    pub simulations: usize,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            confidence: 0.99,
            horizon_days: 1,
            simulations: 100_000,
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Output format
    pub output: OutputFormat,
    /// Monte Carlo defaults
    pub simulation: SimulationSettings,
    /// VaR defaults
    pub risk: RiskSettings,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `QUANTKERNEL_*` overrides read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = output.parse()?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            let seed = seed
                .trim()
                .parse()
                .map_err(|_| CliError::Config(format!("Invalid {}: {}", ENV_SEED, seed)))?;
            self.simulation.seed = Some(seed);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        if let Some(seed) = cli.seed {
            self.simulation.seed = Some(seed);
        }
    }
}

/// Global flags that override file and environment settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Output format override
    pub output: Option<OutputFormat>,
    /// Seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
///
/// An explicitly named config file must exist; the default
/// `quantkernel.toml` is only read when present.
pub fn build_config<F>(cli: &CliOverrides, env: F) -> Result<CliConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) if !path.exists() => {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        Some(path) => CliConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            CliConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliConfig::default(),
    };

    config.apply_env_with(env)?;
    config.merge_with_cli(cli);
    Ok(config)
}
