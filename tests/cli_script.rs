use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget_planner_cli").unwrap();
    cmd.env("BUDGET_PLANNER_CLI_SCRIPT", "1")
        .env("BUDGET_PLANNER_HOME", home.path())
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_prints_breakdown() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("income 1200\nadd Rent 800\nadd Food 200\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Added `Rent`."))
        .stdout(contains("80.00%"))
        .stdout(contains("Remaining      : 200 €"));
}

#[test]
fn script_mode_reports_validation_errors_and_continues() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("add Food 20\nadd food 5\nadd Misc\nadd Misc abc\nexport -\n")
        .assert()
        .success()
        .stdout(contains("already exists"))
        .stdout(contains("Please enter a valid amount."))
        .stdout(contains("Category,Amount\nFood,20\nTotal,20\n"));
}

#[test]
fn export_defaults_to_data_directory() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("add Rent 800\nexport\n")
        .assert()
        .success()
        .stdout(contains("Exported 1 expense(s)"));

    let path = home.path().join("exports").join("Monthly_Budget.csv");
    let csv = std::fs::read_to_string(path).unwrap();
    assert_eq!(csv, "Category,Amount\nRent,800\nTotal,800\n");
}

#[test]
fn unknown_command_suggests_nearest() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("lst\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `list`?"));
}
