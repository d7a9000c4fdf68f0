//! quantkernel CLI - command-line host for the derivatives kernel
//!
//! # Commands
//!
//! - `quantkernel price` - Black-Scholes price and Greeks
//! - `quantkernel implied-vol --price <p>` - Newton implied volatility
//! - `quantkernel mc --payoff <kind>` - GBM Monte Carlo pricing
//! - `quantkernel paths` - terminal-price distribution under real-world drift
//! - `quantkernel var historical|parametric|simulated` - VaR and expected shortfall
//! - `quantkernel book --positions <file>` - parallel book valuation
//!
//! Settings resolve CLI flags first, then `QUANTKERNEL_*` environment
//! variables, then `quantkernel.toml`, then built-in defaults.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricer_core::types::{OptionContract, OptionKind};
use pricer_pricing::mc::{PayoffKind, SimulationConfig};
use pricer_risk::var::VarConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

use config::{build_config, CliConfig, CliOverrides, LogLevel, OutputFormat};
use error::{CliError, Result};

/// Option pricing, Monte Carlo simulation and VaR from the command line
#[derive(Parser)]
#[command(name = "quantkernel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./quantkernel.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level written to stderr
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Seed for every random draw
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Black-Scholes price and Greeks
    Price {
        #[command(flatten)]
        contract: ContractArgs,
        /// Option type
        #[arg(short, long, value_enum, default_value_t = KindArg::Call)]
        kind: KindArg,
    },

    /// Solve for the volatility reproducing a market price
    ImpliedVol {
        /// Observed option price
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[command(flatten)]
        contract: ContractArgs,
        /// Option type
        #[arg(short, long, value_enum, default_value_t = KindArg::Call)]
        kind: KindArg,
    },

    /// Monte Carlo price under risk-neutral GBM
    Mc {
        #[command(flatten)]
        contract: ContractArgs,
        /// Payoff to simulate
        #[arg(short, long, value_enum, default_value_t = PayoffArg::Call)]
        payoff: PayoffArg,
        /// Up-and-out barrier level
        #[arg(long)]
        barrier: Option<f64>,
        /// Number of paths (overrides [simulation].paths)
        #[arg(long)]
        paths: Option<usize>,
        /// Time steps per path (overrides [simulation].steps)
        #[arg(long)]
        steps: Option<usize>,
    },

    /// Terminal-price distribution under real-world GBM
    Paths {
        /// Starting price
        #[arg(long)]
        spot: f64,
        /// Annual drift
        #[arg(long, allow_negative_numbers = true)]
        mu: f64,
        /// Annual volatility
        #[arg(long)]
        sigma: f64,
        /// Horizon in years
        #[arg(long, default_value_t = 1.0)]
        expiry: f64,
        /// Number of paths
        #[arg(long)]
        paths: Option<usize>,
        /// Time steps per path
        #[arg(long)]
        steps: Option<usize>,
    },

    /// Value-at-Risk and expected shortfall
    Var {
        #[command(subcommand)]
        method: VarCommand,
    },

    /// Value a CSV book of option positions
    Book {
        /// Position file (id,kind,quantity,spot,strike,expiry,rate,volatility[,dividend_yield])
        #[arg(long)]
        positions: PathBuf,
        /// Price each position by Monte Carlo instead of closed form
        #[arg(long)]
        monte_carlo: bool,
        /// Number of paths per position
        #[arg(long)]
        paths: Option<usize>,
        /// Time steps per path
        #[arg(long)]
        steps: Option<usize>,
    },
}

#[derive(Subcommand)]
enum VarCommand {
    /// Empirical quantile of an observed return series
    Historical {
        #[command(flatten)]
        source: ReturnsArgs,
        #[command(flatten)]
        level: VarLevelArgs,
    },
    /// Normal approximation fitted to a return series
    Parametric {
        #[command(flatten)]
        source: ReturnsArgs,
        #[command(flatten)]
        level: VarLevelArgs,
    },
    /// Quantile of simulated normal horizon returns
    Simulated {
        /// Daily mean return
        #[arg(long, allow_negative_numbers = true)]
        mu: f64,
        /// Daily return volatility
        #[arg(long)]
        sigma: f64,
        /// Number of simulated returns (overrides [risk].simulations)
        #[arg(long)]
        simulations: Option<usize>,
        #[command(flatten)]
        level: VarLevelArgs,
    },
}

#[derive(Args)]
struct ContractArgs {
    /// Spot price
    #[arg(long)]
    spot: f64,
    /// Strike price
    #[arg(long)]
    strike: f64,
    /// Time to expiry in years
    #[arg(long)]
    expiry: f64,
    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rate: f64,
    /// Annual volatility
    #[arg(long, default_value_t = 0.2)]
    volatility: f64,
    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dividend: f64,
}

impl ContractArgs {
    fn contract(&self) -> OptionContract {
        OptionContract::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend,
        )
    }
}

#[derive(Args)]
struct ReturnsArgs {
    /// CSV file of periodic returns
    #[arg(long)]
    returns: PathBuf,
    /// Header name of the return column (first column, no header, when omitted)
    #[arg(long)]
    column: Option<String>,
}

#[derive(Args)]
struct VarLevelArgs {
    /// Confidence level in (0, 1) (overrides [risk].confidence)
    #[arg(long)]
    confidence: Option<f64>,
    /// Holding period in days (overrides [risk].horizon_days)
    #[arg(long)]
    horizon: Option<u32>,
}

impl VarLevelArgs {
    fn resolve(&self, config: &CliConfig) -> Result<VarConfig> {
        Ok(VarConfig::new(
            self.confidence.unwrap_or(config.risk.confidence),
            self.horizon.unwrap_or(config.risk.horizon_days),
        )?)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Call,
    Put,
}

impl From<KindArg> for OptionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Call => OptionKind::Call,
            KindArg::Put => OptionKind::Put,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PayoffArg {
    Call,
    Put,
    AsianCall,
    AsianPut,
    /// Up-and-out barrier call
    BarrierUpAndOut,
}

impl From<PayoffArg> for PayoffKind {
    fn from(payoff: PayoffArg) -> Self {
        match payoff {
            PayoffArg::Call => PayoffKind::Call,
            PayoffArg::Put => PayoffKind::Put,
            PayoffArg::AsianCall => PayoffKind::AsianCall,
            PayoffArg::AsianPut => PayoffKind::AsianPut,
            PayoffArg::BarrierUpAndOut => PayoffKind::BarrierUpAndOutCall,
        }
    }
}

fn simulation_config(
    config: &CliConfig,
    paths: Option<usize>,
    steps: Option<usize>,
) -> Result<SimulationConfig> {
    Ok(SimulationConfig::builder()
        .n_paths(paths.unwrap_or(config.simulation.paths))
        .n_steps(steps.unwrap_or(config.simulation.steps))
        .maybe_seed(config.simulation.seed)
        .build()?)
}

fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands, config: &CliConfig) -> Result<String> {
    let format = config.output;
    match command {
        Commands::Price { contract, kind } => {
            commands::price::run(contract.contract(), kind.into(), format)
        }
        Commands::ImpliedVol {
            price,
            contract,
            kind,
        } => commands::implied_vol::run(price, contract.contract(), kind.into(), format),
        Commands::Mc {
            contract,
            payoff,
            barrier,
            paths,
            steps,
        } => commands::monte_carlo::run(
            contract.contract(),
            payoff.into(),
            barrier,
            simulation_config(config, paths, steps)?,
            format,
        ),
        Commands::Paths {
            spot,
            mu,
            sigma,
            expiry,
            paths,
            steps,
        } => commands::paths::run(
            commands::paths::GbmInputs {
                spot,
                mu,
                sigma,
                expiry,
            },
            simulation_config(config, paths, steps)?,
            format,
        ),
        Commands::Var { method } => match method {
            VarCommand::Historical { source, level } => {
                let returns = input::read_returns(input::open(&source.returns)?, source.column.as_deref())?;
                commands::var::historical(returns, level.resolve(config)?, format)
            }
            VarCommand::Parametric { source, level } => {
                let returns = input::read_returns(input::open(&source.returns)?, source.column.as_deref())?;
                commands::var::parametric(returns, level.resolve(config)?, format)
            }
            VarCommand::Simulated {
                mu,
                sigma,
                simulations,
                level,
            } => commands::var::simulated(
                mu,
                sigma,
                level.resolve(config)?,
                simulations.unwrap_or(config.risk.simulations),
                config.simulation.seed,
                format,
            ),
        },
        Commands::Book {
            positions,
            monte_carlo,
            paths,
            steps,
        } => {
            let positions = input::read_positions(input::open(&positions)?)?;
            let simulation = if monte_carlo {
                Some(simulation_config(config, paths, steps)?)
            } else {
                None
            };
            commands::book::run(positions, simulation, format)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        config_file: cli.config,
        log_level: cli.log_level,
        output: cli.output,
        seed: cli.seed,
    };

    let config = match build_config(&overrides, |key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_level);
    tracing::debug!(?config, "resolved configuration");

    match run(cli.command, &config) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
