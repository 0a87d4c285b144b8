//! Table, JSON and CSV rendering of command results.

use crate::compare::{ParityCheck, Quote, SeriesSet};
use crate::error::{CliError, Result};
use asian_core::Real;
use clap::ValueEnum;
use serde::Serialize;
use tabled::builder::Builder;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text.
    Text(String),
    /// A number, printed at full precision in CSV.
    Number(Real),
    /// A value that could not be computed.
    Missing,
}

impl From<Option<Real>> for Cell {
    fn from(v: Option<Real>) -> Self {
        v.map_or(Cell::Missing, Cell::Number)
    }
}

/// Results that can be laid out as rows and columns.
pub trait Tabular {
    /// Column headers.
    fn headers(&self) -> Vec<String>;
    /// Data rows, each as long as the header.
    fn rows(&self) -> Vec<Vec<Cell>>;
}

impl Tabular for SeriesSet {
    fn headers(&self) -> Vec<String> {
        std::iter::once(self.parameter.to_string())
            .chain(self.names().map(str::to_owned))
            .collect()
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                std::iter::once(Cell::Number(x))
                    .chain(self.series.iter().map(|s| Cell::from(s.values[i])))
                    .collect()
            })
            .collect()
    }
}

impl Tabular for Vec<Quote> {
    fn headers(&self) -> Vec<String> {
        ["method", "type", "price", "conf95"].map(String::from).to_vec()
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.iter()
            .map(|q| {
                vec![
                    Cell::Text(q.method.clone()),
                    Cell::Text(q.option_type.clone()),
                    Cell::Number(q.price),
                    Cell::from(q.conf95),
                ]
            })
            .collect()
    }
}

impl Tabular for ParityCheck {
    fn headers(&self) -> Vec<String> {
        ["field", "value"].map(String::from).to_vec()
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        let field = |name: &str, v: Real| vec![Cell::Text(name.to_owned()), Cell::Number(v)];
        vec![
            field("call", self.call),
            field("put", self.put),
            field("call - put", self.numerical),
            field("S0*Gamma(T) - K*exp(-rT)", self.analytical),
            field("deviation", self.deviation),
            field("tolerance", self.tolerance),
            vec![Cell::Text("holds".into()), Cell::Text(self.holds.to_string())],
        ]
    }
}

/// Render `value` in the requested format.
pub fn render<T>(value: &T, format: OutputFormat) -> Result<String>
where
    T: Tabular + Serialize + ?Sized,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Csv => render_csv(value),
        OutputFormat::Table => Ok(render_table(value)),
    }
}

fn render_csv<T: Tabular + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        wtr.write_record(value.headers())?;
        for row in value.rows() {
            wtr.write_record(row.iter().map(|c| match c {
                Cell::Text(s) => s.clone(),
                Cell::Number(v) => v.to_string(),
                Cell::Missing => String::new(),
            }))?;
        }
        wtr.flush()?;
    }
    String::from_utf8(buf).map_err(|e| CliError::InvalidArgument(e.to_string()))
}

fn render_table<T: Tabular + ?Sized>(value: &T) -> String {
    let mut builder = Builder::default();
    builder.push_record(value.headers());
    for row in value.rows() {
        builder.push_record(row.iter().map(|c| match c {
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => format!("{v:.6}"),
            Cell::Missing => "-".to_owned(),
        }));
    }
    builder.build().to_string()
}
