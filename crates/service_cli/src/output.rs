//! Rendering of command results as boxed tables or JSON.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// A boxed text table with a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Two-column `Field | Value` table.
    pub fn key_value() -> Self {
        Self::new(["Field", "Value"])
    }

    /// Appends a row; missing cells render empty, extra cells are dropped.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    /// Appends a `field, value` row with the value in fixed precision.
    pub fn field(self, name: &str, value: f64) -> Self {
        self.row([name.to_string(), number(value)])
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();
        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!(" {:<width$} ", cell, width = w))
                .collect();
            format!("│{}│", padded.join("│"))
        };

        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        writeln!(f, "{}", line(&self.headers))?;
        writeln!(f, "{}", rule("├", "┼", "┤"))?;
        for row in &self.rows {
            writeln!(f, "{}", line(row))?;
        }
        write!(f, "{}", rule("└", "┴", "┘"))
    }
}

/// Fixed six-decimal rendering used in every table.
pub fn number(value: f64) -> String {
    format!("{:.6}", value)
}

/// Renders `value` as JSON or as the table built by `table`.
pub fn render<T, F>(format: OutputFormat, value: &T, table: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce() -> Table,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table().to_string()),
    }
}
