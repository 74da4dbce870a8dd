use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSWORD: &str = "correcthorse123";

fn vault(dir: &TempDir, password: Option<&str>) -> Command {
    let mut cmd = Command::cargo_bin("expense-vault").unwrap();
    cmd.env("EXPENSE_VAULT_DATA_DIR", dir.path())
        .env_remove("EXPENSE_VAULT_LOG");
    match password {
        Some(p) => cmd.env("EXPENSE_VAULT_PASSWORD", p),
        None => cmd.env_remove("EXPENSE_VAULT_PASSWORD"),
    };
    cmd
}

fn setup(dir: &TempDir) {
    vault(dir, Some(PASSWORD))
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password set"));
}

#[test]
fn test_status_before_and_after_setup() {
    let dir = TempDir::new().unwrap();

    vault(&dir, None)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT SET"));

    setup(&dir);

    vault(&dir, None)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password:  SET"));
}

#[test]
fn test_setup_rejects_short_password() {
    let dir = TempDir::new().unwrap();

    vault(&dir, Some("short"))
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn test_add_and_list_expense() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    vault(&dir, Some(PASSWORD))
        .args(["expense", "add", "42.5", "food", "Lunch", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: Lunch"));

    vault(&dir, Some(PASSWORD))
        .args(["config", "currency", "usd"])
        .assert()
        .success();

    vault(&dir, Some(PASSWORD))
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("$42.50"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn test_data_on_disk_is_encrypted() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    vault(&dir, Some(PASSWORD))
        .args(["expense", "add", "12", "Food", "SecretSandwich"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(dir.path().join("store.json")).unwrap();
    assert!(!raw.contains("SecretSandwich"));
    assert!(raw.contains("expense_tracker_setup"));
}

#[test]
fn test_wrong_password_is_rejected() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    vault(&dir, Some("wrongpassword"))
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect password"));

    vault(&dir, Some("wrongpassword"))
        .arg("verify")
        .assert()
        .failure();

    vault(&dir, Some(PASSWORD))
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password is correct"));
}

#[test]
fn test_recurring_and_summary() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    vault(&dir, Some(PASSWORD))
        .args(["config", "currency", "USD"])
        .assert()
        .success();

    vault(&dir, Some(PASSWORD))
        .args([
            "recurring",
            "add",
            "15",
            "Subscriptions",
            "Music",
            "--day",
            "3",
            "--date",
            "2024-03-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("every 3rd of the month"));

    vault(&dir, Some(PASSWORD))
        .args(["budget", "set", "Subscriptions", "10"])
        .assert()
        .success();

    vault(&dir, Some(PASSWORD))
        .args(["recurring", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Monthly Recurring: $15.00"));

    vault(&dir, Some(PASSWORD))
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary for March 2024"))
        .stdout(predicate::str::contains("Over budget"));
}

#[test]
fn test_recurring_day_out_of_range() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    vault(&dir, Some(PASSWORD))
        .args(["recurring", "add", "15", "Other", "Gym", "--day", "31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 28"));
}

#[test]
fn test_export_nothing() {
    let dir = TempDir::new().unwrap();

    vault(&dir, None)
        .args(["export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data to export"));
}

#[test]
fn test_export_then_import_elsewhere() {
    let source = TempDir::new().unwrap();
    setup(&source);
    vault(&source, Some(PASSWORD))
        .args(["expense", "add", "42.5", "Food", "Lunch", "--date", "2024-01-01"])
        .assert()
        .success();

    let export_path = source.path().join("backup.enc");
    vault(&source, None)
        .args(["export", "--output"])
        .arg(&export_path)
        .assert()
        .success();
    assert!(export_path.exists());

    let target = TempDir::new().unwrap();

    vault(&target, Some("wrongpassword"))
        .arg("import")
        .arg(&export_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import data"));

    vault(&target, Some(PASSWORD))
        .arg("import")
        .arg(&export_path)
        .assert()
        .success();

    vault(&target, Some(PASSWORD))
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn test_wipe() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    vault(&dir, None)
        .args(["wipe", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("permanently deleted"));

    vault(&dir, None)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT SET"));

    // Empty store reads with any password
    vault(&dir, Some("anything-at-all"))
        .args(["summary", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses this month."));

    vault(&dir, Some(PASSWORD))
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expense-vault setup"));
}

#[test]
fn test_data_commands_require_setup() {
    let dir = TempDir::new().unwrap();

    vault(&dir, Some("x"))
        .args(["budget", "set", "Food", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run 'expense-vault setup' first"));

    vault(&dir, Some("x"))
        .args(["expense", "add", "5", "Food", "Snack"])
        .assert()
        .failure();

    vault(&dir, Some("x"))
        .args(["recurring", "add", "5", "Other", "Gym"])
        .assert()
        .failure();

    vault(&dir, None)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT SET"));

    // A short password is still refused by setup itself
    vault(&dir, Some("x"))
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn test_negative_amounts_reach_validation() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    vault(&dir, Some(PASSWORD))
        .args(["expense", "add", "-5", "Food", "Refund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount cannot be negative"));

    vault(&dir, Some(PASSWORD))
        .args(["budget", "set", "Food", "-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget must be a non-negative number"));
}

#[test]
fn test_import_timestamped_recurring_export() {
    let payload = r#"{"expenses":[{"id":"6f1c2a8e-1d2b-4c3d-9e4f-5a6b7c8d9e0f","amount":15,"category":"Subscriptions","description":"Music","date":"2024-03-05T10:11:12.345Z","isRecurring":true,"recurringDay":5,"createdAt":"2024-03-05T10:11:12.345Z"}],"budgets":{}}"#;
    let token = expense_vault::crypto::encrypt_string(payload, PASSWORD).unwrap();

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("expense-tracker-2024-03-05.enc");
    std::fs::write(&file, token).unwrap();

    vault(&dir, Some(PASSWORD))
        .arg("import")
        .arg(&file)
        .assert()
        .success();

    vault(&dir, Some(PASSWORD))
        .args(["recurring", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Music"))
        .stdout(predicate::str::contains("every 5th of the month"));

    vault(&dir, Some(PASSWORD))
        .args(["expense", "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-05"));
}
