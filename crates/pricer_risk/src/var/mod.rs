//! Value-at-Risk and expected shortfall.
//!
//! Three estimators share one convention: a loss is reported as a positive
//! number, so a VaR of `0.02` means a 2% loss is exceeded with probability
//! `1 − c` over the holding period.
//!
//! - [`historical`]: empirical quantile of observed returns, scaled by `√h`
//! - [`simulated`]: empirical quantile of simulated normal horizon returns
//! - [`parametric`]: closed-form normal quantile from sample moments

pub mod error;
pub mod historical;
pub mod parametric;
pub mod series;
pub mod simulated;

pub use error::RiskError;
pub use historical::{
    historical_estimate, historical_expected_shortfall, historical_var, shortfall_from_sorted,
    var_from_sorted,
};
pub use parametric::{normal_var, parametric_var};
pub use series::{horizon_scale, tail_index, ReturnSeries, VarConfig, VarEstimate, VarMethod};
pub use simulated::{simulate_horizon_returns, simulated_var, simulated_var_with_shortfall};
