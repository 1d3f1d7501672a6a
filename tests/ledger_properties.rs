mod common;

use budget_planner::{
    errors::{InputField, LedgerError},
    export::{ExportRow, ExportValue},
    ledger::ExpenseLedger,
};
use common::ledger_from;

#[test]
fn empty_name_is_rejected_without_mutation() {
    let mut ledger = ledger_from(&[("Rent", "800")]);
    let before = ledger.clone();
    assert_eq!(
        ledger.add("", "10"),
        Err(LedgerError::EmptyInput {
            field: InputField::Name
        })
    );
    assert_eq!(ledger, before);
}

#[test]
fn non_numeric_amount_is_rejected() {
    let mut ledger = ExpenseLedger::new();
    assert!(matches!(
        ledger.add("Food", "abc"),
        Err(LedgerError::InvalidAmount {
            field: InputField::Amount,
            ..
        })
    ));
    assert!(ledger.is_empty());
}

#[test]
fn negative_amount_is_rejected() {
    let mut ledger = ExpenseLedger::new();
    assert!(matches!(
        ledger.add("Food", "-5"),
        Err(LedgerError::NonPositiveAmount { .. })
    ));
}

#[test]
fn case_variant_duplicate_keeps_first_entry() {
    let mut ledger = ledger_from(&[("Food", "20")]);
    assert!(matches!(
        ledger.add("food", "5"),
        Err(LedgerError::DuplicateName { .. })
    ));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.entries()[0].amount, 20.0);
}

#[test]
fn validation_order_reports_empty_before_duplicate() {
    let mut ledger = ledger_from(&[("Food", "20")]);
    assert_eq!(
        ledger.add("Food", " "),
        Err(LedgerError::EmptyInput {
            field: InputField::Amount
        })
    );
    assert!(matches!(
        ledger.add("Food", "0"),
        Err(LedgerError::NonPositiveAmount { .. })
    ));
}

#[test]
fn total_matches_sum_of_added_amounts() {
    let amounts = ["0.1", "0.2", "15", "999.99", "3"];
    let names = ["a", "b", "c", "d", "e"];
    let items: Vec<(&str, &str)> = names.iter().copied().zip(amounts.iter().copied()).collect();
    let ledger = ledger_from(&items);
    let expected: f64 = amounts.iter().map(|raw| raw.parse::<f64>().unwrap()).sum();
    assert!((ledger.total() - expected).abs() < 1e-9);

    let reversed: Vec<_> = items.into_iter().rev().collect();
    let ledger = ledger_from(&reversed);
    assert!((ledger.total() - expected).abs() < 1e-9);
}

#[test]
fn percentages_add_up_to_one_hundred_within_rounding() {
    let ledger = ledger_from(&[("Rent", "800"), ("Food", "215.35"), ("Fun", "7")]);
    let shares = ledger.percentages();
    let displayed: f64 = shares
        .iter()
        .map(|share| share.display_percentage().parse::<f64>().unwrap())
        .sum();
    assert!((displayed - 100.0).abs() <= 0.01 * shares.len() as f64);
    let exact: f64 = shares.iter().map(|share| share.percentage).sum();
    assert!((exact - 100.0).abs() < 1e-9);
}

#[test]
fn remove_preserves_relative_order() {
    let mut ledger = ledger_from(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
    ledger.remove(0).expect("first entry");
    ledger.remove(1).expect("middle entry");
    let names: Vec<_> = ledger.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["b", "d"]);

    assert!(ledger.remove(2).is_none());
    assert_eq!(ledger.len(), 2);
}

#[test]
fn removed_name_can_be_added_again() {
    let mut ledger = ledger_from(&[("Food", "20")]);
    ledger.remove(0).expect("entry");
    assert!(ledger.add("FOOD", "25").is_ok());
    assert_eq!(ledger.total(), 25.0);
}

#[test]
fn export_rows_for_rent_and_food() {
    let ledger = ledger_from(&[("Rent", "800"), ("Food", "200")]);
    let rows = ledger.export_rows(Some(1200.0));
    let flattened: Vec<(String, String)> = rows
        .iter()
        .map(|row| (row.label.clone(), row.value.to_string()))
        .collect();
    assert_eq!(
        flattened,
        [
            ("Category".to_string(), "Amount".to_string()),
            ("Rent".to_string(), "800".to_string()),
            ("Food".to_string(), "200".to_string()),
            ("Total".to_string(), "1000".to_string()),
            ("Remaining".to_string(), "200".to_string()),
        ]
    );
    assert_eq!(rows[0].value, ExportValue::Text("Amount".into()));
    assert_eq!(rows[4], ExportRow::amount("Remaining", 200.0));
}

#[test]
fn huge_amounts_cannot_push_total_to_infinity() {
    let mut ledger = ledger_from(&[("a", "1e308")]);
    assert!(matches!(
        ledger.add("b", "1e308"),
        Err(LedgerError::TotalOverflow { .. })
    ));
    let sum: f64 = ledger.percentages().iter().map(|share| share.percentage).sum();
    assert!((sum - 100.0).abs() < 0.01);
    let rows = ledger.export_rows(Some(1200.0));
    assert!(rows
        .iter()
        .all(|row| !row.value.to_string().contains("inf")));
}
