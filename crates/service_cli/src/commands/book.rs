//! Book valuation command implementation
//!
//! Values a CSV book in closed form, or by Monte Carlo when requested.

use pricer_pricing::mc::SimulationConfig;
use pricer_risk::parallel::{simulate_book, value_book, ParallelConfig, Position};

use crate::config::OutputFormat;
use crate::output::{number, render, Table};
use crate::{CliError, Result};

/// Run the book command
pub fn run(
    positions: Vec<Position>,
    monte_carlo: Option<SimulationConfig>,
    format: OutputFormat,
) -> Result<String> {
    if positions.is_empty() {
        return Err(CliError::InvalidArgument("book has no positions".to_string()));
    }
    let parallel = ParallelConfig::default();

    match monte_carlo {
        None => {
            let valuation = value_book(&positions, &parallel);
            render(format, &valuation, || {
                let mut table = Table::new(["id", "qty", "price", "value", "delta", "gamma", "vega"]);
                for p in &valuation.positions {
                    table = table.row([
                        p.id.clone(),
                        p.quantity.to_string(),
                        number(p.greeks.price),
                        number(p.value()),
                        number(p.greeks.delta),
                        number(p.greeks.gamma),
                        number(p.greeks.vega),
                    ]);
                }
                let s = &valuation.summary;
                table.row([
                    "TOTAL".to_string(),
                    s.positions.to_string(),
                    String::new(),
                    number(s.value),
                    number(s.delta),
                    number(s.gamma),
                    number(s.vega),
                ])
            })
        }
        Some(simulation) => {
            let book = simulate_book(&positions, &simulation, &parallel);
            render(format, &book, || {
                let mut table = Table::new(["id", "qty", "price", "std error", "value"]);
                for p in &book.positions {
                    table = table.row([
                        p.id.clone(),
                        p.quantity.to_string(),
                        number(p.result.price),
                        number(p.result.std_error),
                        number(p.value()),
                    ]);
                }
                table.row([
                    "TOTAL".to_string(),
                    book.positions.len().to_string(),
                    String::new(),
                    number(book.std_error),
                    number(book.value),
                ])
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::{OptionContract, OptionKind};

    fn book() -> Vec<Position> {
        let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
        vec![
            Position::new("C", contract, OptionKind::Call, 2.0),
            Position::new("P", contract, OptionKind::Put, -1.0),
        ]
    }

    #[test]
    fn test_closed_form_table_has_total() {
        let out = run(book(), None, OutputFormat::Table).unwrap();
        assert!(out.contains("TOTAL"));
        assert!(out.contains("│ C "));
    }

    #[test]
    fn test_closed_form_json_summary() {
        let out = run(book(), None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["positions"], 2);
        // 2·10.4506 − 5.5735
        let total = value["summary"]["value"].as_f64().unwrap();
        assert!((total - 15.3277).abs() < 1e-3);
    }

    #[test]
    fn test_monte_carlo_book() {
        let simulation = SimulationConfig::builder()
            .n_paths(5_000)
            .n_steps(1)
            .seed(4)
            .build()
            .unwrap();
        let out = run(book(), Some(simulation), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["positions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_book_rejected() {
        assert!(run(vec![], None, OutputFormat::Table).is_err());
    }
}
