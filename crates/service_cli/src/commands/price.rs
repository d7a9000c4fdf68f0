//! Price command implementation
//!
//! Closed-form price and Greeks for one contract.

use pricer_core::types::{OptionContract, OptionKind};
use pricer_models::analytical::{BlackScholes, Greeks};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::output::{render, Table};
use crate::Result;

#[derive(Debug, Serialize)]
struct PriceReport {
    kind: OptionKind,
    contract: OptionContract,
    greeks: Greeks,
}

/// Run the price command
pub fn run(contract: OptionContract, kind: OptionKind, format: OutputFormat) -> Result<String> {
    contract.validate()?;
    let greeks = BlackScholes::new(contract).greeks(kind);
    tracing::info!(kind = %kind, price = greeks.price, "priced contract");

    let report = PriceReport {
        kind,
        contract,
        greeks,
    };
    render(format, &report, || {
        Table::key_value()
            .row(["kind".to_string(), kind.to_string()])
            .field("price", greeks.price)
            .field("delta", greeks.delta)
            .field("gamma", greeks.gamma)
            .field("vega", greeks.vega)
            .field("theta", greeks.theta)
            .field("rho", greeks.rho)
            .field("d1", greeks.d1)
            .field("d2", greeks.d2)
    })
}
