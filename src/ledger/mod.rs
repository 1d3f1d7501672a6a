//! Expense ledger shared by the planning and tracking screens.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{normalize_name, parse_amount, Entry};
pub use ledger::{ExpenseLedger, Share};
