use budget_planner::ledger::ExpenseLedger;

/// Builds a ledger from `(name, amount)` pairs that are expected to be valid.
pub fn ledger_from(items: &[(&str, &str)]) -> ExpenseLedger {
    let mut ledger = ExpenseLedger::new();
    for (name, amount) in items {
        ledger
            .add(name, amount)
            .unwrap_or_else(|err| panic!("`{name}` should be accepted: {err}"));
    }
    ledger
}
