use super::entry::{normalize_name, parse_amount, Entry};
use crate::{
    errors::{InputField, LedgerError},
    export::{ExportLabels, ExportRow},
};

/// Ordered collection of expense entries owned by one budgeting screen.
///
/// Insertion order is display and export order. Only [`ExpenseLedger::add`]
/// and [`ExpenseLedger::remove`] mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseLedger {
    entries: Vec<Entry>,
}

/// One entry paired with its share of the ledger total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share<'a> {
    pub entry: &'a Entry,
    pub percentage: f64,
}

impl Share<'_> {
    pub fn display_percentage(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw form input and appends a new entry.
    pub fn add(&mut self, name: &str, amount_text: &str) -> Result<(), LedgerError> {
        let entry = match self.validate(name, amount_text) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(name, amount_text, error = %err, "rejected ledger entry");
                return Err(err);
            }
        };
        tracing::info!(name = %entry.name, amount = entry.amount, "added ledger entry");
        self.entries.push(entry);
        Ok(())
    }

    fn validate(&self, name: &str, amount_text: &str) -> Result<Entry, LedgerError> {
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyInput {
                field: InputField::Name,
            });
        }
        let amount = parse_amount(InputField::Amount, amount_text)?;
        if amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount { amount });
        }
        if self.contains_name(name) {
            return Err(LedgerError::DuplicateName {
                name: name.trim().to_string(),
            });
        }
        if !(self.total() + amount).is_finite() {
            return Err(LedgerError::TotalOverflow { amount });
        }
        Ok(Entry::new(name, amount))
    }

    /// Removes the entry at `index`, shifting later entries down by one.
    /// Out-of-range indices leave the ledger untouched.
    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "remove index out of range");
            return None;
        }
        let removed = self.entries.remove(index);
        tracing::info!(name = %removed.name, index, "removed ledger entry");
        Some(removed)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case- and whitespace-insensitive name lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        self.entries
            .iter()
            .any(|entry| entry.normalized_name() == normalized)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn percentages(&self) -> Vec<Share<'_>> {
        let total = self.total();
        self.entries
            .iter()
            .map(|entry| Share {
                entry,
                percentage: if total == 0.0 {
                    0.0
                } else {
                    entry.amount / total * 100.0
                },
            })
            .collect()
    }

    /// Rows for the spreadsheet sink using the default labels.
    pub fn export_rows(&self, income: Option<f64>) -> Vec<ExportRow> {
        self.export_rows_with(income, &ExportLabels::default())
    }

    /// Header, one row per entry, the total, and the remaining balance when an
    /// income is supplied.
    pub fn export_rows_with(&self, income: Option<f64>, labels: &ExportLabels) -> Vec<ExportRow> {
        let total = self.total();
        let mut rows = Vec::with_capacity(self.entries.len() + 3);
        rows.push(ExportRow::header(labels));
        rows.extend(
            self.entries
                .iter()
                .map(|entry| ExportRow::amount(entry.name.clone(), entry.amount)),
        );
        rows.push(ExportRow::amount(labels.total.clone(), total));
        if let Some(income) = income {
            rows.push(ExportRow::amount(labels.remaining.clone(), income - total));
        }
        rows
    }
}
