use crate::errors::{InputField, LedgerError};

/// A named, positive-amount expense record.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub amount: f64,
}

impl Entry {
    /// Builds an entry from already validated parts.
    pub(crate) fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Name used for duplicate detection: trimmed and lowercased.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Parses raw decimal text coming from a form field into a finite number.
///
/// Blank text is reported as [`LedgerError::EmptyInput`]; anything that is not
/// a finite decimal (including `inf` and `NaN`) as [`LedgerError::InvalidAmount`].
pub fn parse_amount(field: InputField, text: &str) -> Result<f64, LedgerError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyInput { field });
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::InvalidAmount {
            field,
            input: trimmed.to_string(),
        }),
    }
}
