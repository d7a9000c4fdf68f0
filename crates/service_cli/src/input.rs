//! CSV inputs: return series and option books.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pricer_core::types::{OptionContract, OptionKind};
use pricer_risk::parallel::Position;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Opens an input file, mapping a missing path to [`CliError::FileNotFound`].
pub fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(File::open(path)?)
}

/// Reads one column of returns.
///
/// With `column` the first row is a header and the named column is used.
/// Without it the first column is used, and a first row that does not parse
/// as a number is taken to be a header. Blank cells are skipped.
pub fn read_returns<R: Read>(reader: R, column: Option<&str>) -> Result<Vec<f64>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv.records();

    let index = match column {
        Some(name) => {
            let header = records
                .next()
                .transpose()?
                .ok_or_else(|| CliError::InvalidArgument("return file is empty".to_string()))?;
            header.iter().position(|h| h == name).ok_or_else(|| {
                CliError::InvalidArgument(format!("column '{}' not found in return file", name))
            })?
        }
        None => 0,
    };

    let mut returns = Vec::new();
    for (line, record) in records.enumerate() {
        let record = record?;
        let Some(cell) = record.get(index).filter(|c| !c.is_empty()) else {
            continue;
        };
        match cell.parse::<f64>() {
            Ok(value) => returns.push(value),
            Err(_) if column.is_none() && line == 0 => {
                tracing::debug!(header = cell, "treating first row as header");
            }
            Err(_) => {
                return Err(CliError::InvalidArgument(format!(
                    "invalid return '{}' on data row {}",
                    cell,
                    line + 1
                )));
            }
        }
    }
    Ok(returns)
}

#[derive(Debug, Deserialize)]
struct PositionRecord {
    id: String,
    kind: OptionKind,
    quantity: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    #[serde(default)]
    dividend_yield: f64,
}

/// Reads a book with header
/// `id,kind,quantity,spot,strike,expiry,rate,volatility[,dividend_yield]`.
pub fn read_positions<R: Read>(reader: R) -> Result<Vec<Position>> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut positions = Vec::new();
    for record in csv.deserialize() {
        let record: PositionRecord = record?;
        let contract = OptionContract::new(
            record.spot,
            record.strike,
            record.expiry,
            record.rate,
            record.volatility,
            record.dividend_yield,
        );
        contract.validate()?;
        positions.push(Position::new(record.id, contract, record.kind, record.quantity));
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_without_header() {
        let data = "-0.05\n-0.02\n0.0\n\n0.01\n0.03\n";
        let returns = read_returns(data.as_bytes(), None).unwrap();
        assert_eq!(returns, vec![-0.05, -0.02, 0.0, 0.01, 0.03]);
    }

    #[test]
    fn test_returns_with_implicit_header() {
        let data = "return\n0.01\n-0.02\n";
        assert_eq!(read_returns(data.as_bytes(), None).unwrap(), vec![0.01, -0.02]);
    }

    #[test]
    fn test_returns_named_column() {
        let data = "date,spx,ndx\n2024-01-02,0.01,0.02\n2024-01-03,-0.03,-0.01\n";
        let returns = read_returns(data.as_bytes(), Some("ndx")).unwrap();
        assert_eq!(returns, vec![0.02, -0.01]);
    }

    #[test]
    fn test_returns_missing_column() {
        let data = "date,spx\n2024-01-02,0.01\n";
        let err = read_returns(data.as_bytes(), Some("ndx")).unwrap_err();
        assert!(err.to_string().contains("ndx"));
    }

    #[test]
    fn test_returns_bad_value() {
        let data = "0.01\nabc\n";
        let err = read_returns(data.as_bytes(), None).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_positions() {
        let data = "\
id,kind,quantity,spot,strike,expiry,rate,volatility,dividend_yield
A,call,10,100,100,1,0.05,0.2,0
B,put,-5,100,95,0.5,0.05,0.25,0.01
";
        let positions = read_positions(data.as_bytes()).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].id, "B");
        assert_eq!(positions[1].kind, OptionKind::Put);
        assert_eq!(positions[1].quantity, -5.0);
        assert_eq!(positions[1].contract.dividend_yield, 0.01);
    }

    #[test]
    fn test_positions_bad_kind() {
        let data = "id,kind,quantity,spot,strike,expiry,rate,volatility\nA,straddle,1,100,100,1,0.05,0.2\n";
        assert!(matches!(read_positions(data.as_bytes()), Err(CliError::Csv(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = open(Path::new("/nonexistent/returns.csv")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
