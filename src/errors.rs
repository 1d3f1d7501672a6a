use std::fmt;

use thiserror::Error;

/// Raw form fields accepted at the ledger boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Name,
    Amount,
    Income,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputField::Name => "name",
            InputField::Amount => "amount",
            InputField::Income => "income",
        };
        f.write_str(label)
    }
}

/// Rejections raised while validating ledger input. The ledger is never
/// mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Empty input: {field} is required")]
    EmptyInput { field: InputField },
    #[error("Invalid {field}: `{input}` is not a number")]
    InvalidAmount { field: InputField, input: String },
    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },
    #[error("Duplicate entry: `{name}` already exists")]
    DuplicateName { name: String },
    #[error("Adding {amount} would make the total too large")]
    TotalOverflow { amount: f64 },
    #[error("Income must not be negative, got {amount}")]
    NegativeIncome { amount: f64 },
}

impl LedgerError {
    /// Message shown next to the form that produced the error.
    ///
    /// Empty fields get a field-specific message, amount problems an
    /// amount-specific one, and duplicates their own.
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::EmptyInput {
                field: InputField::Name,
            } => "Please enter a name for the expense.".into(),
            LedgerError::EmptyInput {
                field: InputField::Amount,
            } => "Please enter a valid amount.".into(),
            LedgerError::EmptyInput {
                field: InputField::Income,
            } => "Please enter your income.".into(),
            LedgerError::InvalidAmount {
                field: InputField::Income,
                ..
            }
            | LedgerError::NegativeIncome { .. } => "Income must be a positive number.".into(),
            LedgerError::InvalidAmount { .. } | LedgerError::NonPositiveAmount { .. } => {
                "Please enter a valid amount greater than zero.".into()
            }
            LedgerError::TotalOverflow { .. } => {
                "This amount is too large for the current total.".into()
            }
            LedgerError::DuplicateName { .. } => {
                "An expense with this name already exists. Please choose another name.".into()
            }
        }
    }
}

/// Failures while handing rows to the spreadsheet sink.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl<W> From<csv::IntoInnerError<W>> for ExportError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        ExportError::Io(err.into_error())
    }
}

/// Failures while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
