//! One budgeting screen: its expense ledger plus an optional monthly income.

use crate::{
    errors::{InputField, LedgerError},
    export::{ExportLabels, ExportRow},
    ledger::{parse_amount, Entry, ExpenseLedger},
};

/// Snapshot of the derived figures shown under the entry table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub entry_count: usize,
    pub total: f64,
    pub income: Option<f64>,
    pub remaining: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct BudgetSession {
    ledger: ExpenseLedger,
    income: Option<f64>,
}

impl BudgetSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn income(&self) -> Option<f64> {
        self.income
    }

    /// Parses and stores the income. Blank text clears it.
    pub fn set_income(&mut self, text: &str) -> Result<Option<f64>, LedgerError> {
        let amount = match parse_amount(InputField::Income, text) {
            Ok(amount) => amount,
            Err(LedgerError::EmptyInput { .. }) => {
                self.clear_income();
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        if amount < 0.0 {
            return Err(LedgerError::NegativeIncome { amount });
        }
        tracing::info!(income = amount, "income updated");
        self.income = Some(amount);
        Ok(Some(amount))
    }

    pub fn clear_income(&mut self) {
        if self.income.take().is_some() {
            tracing::info!("income cleared");
        }
    }

    pub fn add_expense(&mut self, name: &str, amount_text: &str) -> Result<(), LedgerError> {
        self.ledger.add(name, amount_text)
    }

    pub fn remove_expense(&mut self, index: usize) -> Option<Entry> {
        self.ledger.remove(index)
    }

    pub fn remaining_balance(&self) -> Option<f64> {
        self.income.map(|income| income - self.ledger.total())
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            entry_count: self.ledger.len(),
            total: self.ledger.total(),
            income: self.income,
            remaining: self.remaining_balance(),
        }
    }

    pub fn export_rows(&self, labels: &ExportLabels) -> Vec<ExportRow> {
        self.ledger.export_rows_with(self.income, labels)
    }
}
