mod common;

use budget_planner::{
    config::{Config, ConfigManager},
    export::{rows_to_csv, save_rows, ExportLabels},
    session::BudgetSession,
};
use common::ledger_from;
use tempfile::TempDir;

#[test]
fn saves_csv_atomically_into_missing_directory() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("exports").join("budget.csv");
    let ledger = ledger_from(&[("Rent", "800"), ("Food", "200")]);

    save_rows(&path, &ledger.export_rows(Some(1200.0))).expect("export");

    let written = std::fs::read_to_string(&path).expect("read export");
    assert_eq!(
        written,
        "Category,Amount\nRent,800\nFood,200\nTotal,1000\nRemaining,200\n"
    );
    assert!(!dir.path().join("exports").join("budget.csv.tmp").exists());
}

#[test]
fn custom_labels_flow_into_csv() {
    let labels = ExportLabels {
        header_label: "Catégorie".into(),
        header_value: "Montant (€)".into(),
        total: "Total Dépenses".into(),
        remaining: "Solde Restant".into(),
    };
    let mut session = BudgetSession::new();
    session.add_expense("Loyer", "700").expect("add");
    session.set_income("1000").expect("income");

    let csv = rows_to_csv(&session.export_rows(&labels)).expect("csv");
    assert_eq!(
        csv,
        "Catégorie,Montant (€)\nLoyer,700\nTotal Dépenses,700\nSolde Restant,300\n"
    );
}

#[test]
fn config_round_trips_through_disk() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.currency_symbol = "$".into();
    config.export.file_name = "march.csv".into();
    config.export.labels.total = "Sum".into();
    manager.save(&config).expect("save");

    assert_eq!(manager.load().expect("load"), config);
    assert_eq!(
        manager.default_export_path(&config),
        dir.path().join("exports").join("march.csv")
    );
}

#[test]
fn partial_config_file_keeps_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.path(), r#"{"currency_symbol":"£"}"#).expect("write config");

    let config = manager.load().expect("load");
    assert_eq!(config.currency_symbol, "£");
    assert_eq!(config.export, Config::default().export);
}
