use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir)
        .env_remove("EXPENSE_TRACKER_FILE")
        .env_remove("RUST_LOG")
        .current_dir(dir);
    cmd
}

fn ledger_json(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join("data").join("expense_tracker_data.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses --help"));
}

#[test]
fn test_set_and_show_budget() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["budget", "set", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: $1200.00"));

    expenses(temp.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: $1200.00"));

    assert_eq!(ledger_json(temp.path())["budget"], 1200.0);
}

#[test]
fn test_one_time_expense_decrements_budget() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path()).args(["budget", "set", "500"]).assert().success();

    expenses(temp.path())
        .args(["expense", "add", "Bike repair", "75.5", "--frequency", "one-time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deducted from budget."))
        .stdout(predicate::str::contains("Remaining Budget: $424.50"));

    let ledger = ledger_json(temp.path());
    assert_eq!(ledger["budget"], 424.5);
    assert_eq!(ledger["expenses"][0]["name"], "Bike repair");
    assert_eq!(ledger["expenses"][0]["frequency"], "One Time");
}

#[test]
fn test_monthly_is_default_and_not_deducted() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path()).args(["budget", "set", "500"]).assert().success();

    expenses(temp.path())
        .args(["expense", "add", "Phone plan", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Monthly)"))
        .stdout(predicate::str::contains("Remaining Budget: $500.00"));
}

#[test]
fn test_non_numeric_amount_leaves_state_unchanged() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path()).args(["budget", "set", "300"]).assert().success();
    let before = ledger_json(temp.path());

    expenses(temp.path())
        .args(["expense", "add", "Dinner", "forty", "-f", "once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount: forty"));

    expenses(temp.path())
        .args(["budget", "set", "plenty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert_eq!(ledger_json(temp.path()), before);
}

#[test]
fn test_adjustment_frequency_is_rejected() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["expense", "add", "Sneaky", "10", "-f", "adjustment"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved for budget resets"));
}

#[test]
fn test_reset_budget_records_adjustment() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path()).args(["budget", "set", "1000"]).assert().success();

    expenses(temp.path())
        .args(["budget", "reset", "750"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$250.00"))
        .stdout(predicate::str::contains("Remaining Budget: $750.00"));

    let ledger = ledger_json(temp.path());
    let list = ledger["expenses"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Budget Adjustment");
    assert_eq!(list[0]["amount"], -250.0);
    assert_eq!(list[0]["frequency"], "Adjustment");

    expenses(temp.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* Budget Adjustment"));
}

#[test]
fn test_negative_budget_is_accepted() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["budget", "set", "-40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: -$40.00"));
}

#[test]
fn test_corrupt_ledger_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("expense_tracker_data.json"), "{ this is not json").unwrap();

    expenses(temp.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: $0.00"));

    expenses(temp.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_export_csv() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path())
        .args(["expense", "add", "Coffee", "3.5", "-f", "daily"])
        .assert()
        .success();

    expenses(temp.path())
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let csv = fs::read_to_string(temp.path().join("expenses.csv")).unwrap();
    assert_eq!(csv, "Name,Amount,Frequency\nCoffee,3.5,Daily\n");
}

#[test]
fn test_export_json_matches_ledger() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path()).args(["budget", "set", "90"]).assert().success();
    let out = temp.path().join("copy.json");

    expenses(temp.path())
        .args(["export", "--format", "json"])
        .arg(&out)
        .assert()
        .success();

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported, ledger_json(temp.path()));
}

#[test]
fn test_file_override() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("my_ledger.json");

    expenses(temp.path())
        .arg("--file")
        .arg(&custom)
        .args(["budget", "set", "64"])
        .assert()
        .success();

    let text = fs::read_to_string(&custom).unwrap();
    assert!(text.contains("\"budget\": 64.0"));
    assert!(!temp
        .path()
        .join("data")
        .join("expense_tracker_data.json")
        .exists());
}

#[test]
fn test_report_and_history() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path()).args(["budget", "set", "100"]).assert().success();
    expenses(temp.path())
        .args(["expense", "add", "Lunch", "12", "-f", "weekly"])
        .assert()
        .success();

    expenses(temp.path())
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Breakdown"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("100.0%"));

    expenses(temp.path())
        .args(["history", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Budget budget"))
        .stdout(predicate::str::contains("CREATE Expense expense-0 (Lunch)"));
}

#[test]
fn test_deduction_policy_from_settings() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"deduction_policy": "all", "currency_symbol": "€"}"#,
    )
    .unwrap();
    expenses(temp.path()).args(["budget", "set", "50"]).assert().success();

    expenses(temp.path())
        .args(["expense", "add", "Gym", "20", "-f", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: €30.00"));
}

#[test]
fn test_audit_failure_still_reports_success() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("audit.log")).unwrap();
    expenses(temp.path()).args(["budget", "set", "100"]).assert().success();

    expenses(temp.path())
        .args(["expense", "add", "Lamp", "20", "-f", "once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: $80.00"));

    let ledger = ledger_json(temp.path());
    assert_eq!(ledger["budget"], 80.0);
    assert_eq!(ledger["expenses"].as_array().unwrap().len(), 1);
}

#[test]
fn test_unknown_frequency_record_does_not_wipe_ledger() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("expense_tracker_data.json"),
        r#"{"budget": 900, "expenses": [
            {"name": "Rent", "amount": 650.0, "frequency": "Monthly"},
            {"name": "Tax", "amount": 120.0, "frequency": "Yearly"}
        ]}"#,
    )
    .unwrap();

    expenses(temp.path())
        .args(["expense", "add", "Coffee", "3", "-f", "daily"])
        .assert()
        .success();

    let ledger = ledger_json(temp.path());
    assert_eq!(ledger["budget"], 900.0);
    assert_eq!(ledger["expenses"][0]["name"], "Rent");
    assert_eq!(ledger["expenses"][1]["name"], "Coffee");
}

#[test]
fn test_first_run_writes_default_settings() {
    let temp = TempDir::new().unwrap();
    expenses(temp.path()).args(["budget", "show"]).assert().success();

    let text = fs::read_to_string(temp.path().join("config.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(settings["deduction_policy"], "one_time");
    assert_eq!(settings["default_frequency"], "Monthly");
}
