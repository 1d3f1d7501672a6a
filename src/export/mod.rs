//! Export rows and the spreadsheet sinks that consume them.

mod csv_sink;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use csv_sink::{rows_to_csv, save_rows, CsvSink};

use crate::errors::ExportError;

/// Labels used for the header and summary rows of an export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExportLabels {
    pub header_label: String,
    pub header_value: String,
    pub total: String,
    pub remaining: String,
}

impl Default for ExportLabels {
    fn default() -> Self {
        Self {
            header_label: "Category".into(),
            header_value: "Amount".into(),
            total: "Total".into(),
            remaining: "Remaining".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportValue {
    Text(String),
    Amount(f64),
}

impl fmt::Display for ExportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportValue::Text(text) => f.write_str(text),
            ExportValue::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

/// A single `(label, value)` row handed to a spreadsheet sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub label: String,
    pub value: ExportValue,
}

impl ExportRow {
    pub fn header(labels: &ExportLabels) -> Self {
        Self {
            label: labels.header_label.clone(),
            value: ExportValue::Text(labels.header_value.clone()),
        }
    }

    pub fn amount(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            value: ExportValue::Amount(amount),
        }
    }
}

/// Tabular output collaborator: accepts ordered rows and produces a file.
pub trait SpreadsheetSink {
    fn write_rows(&mut self, rows: &[ExportRow]) -> Result<(), ExportError>;
}
