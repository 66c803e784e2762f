//! End-to-end CLI tests
//!
//! Drives the `tally` binary against a temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_add_and_summary() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New expense added: coffee ($3.50)"));

    tally(&dir)
        .args(["add", "salary", "5000", "--category", "revenue", "--date", "2026-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New revenue added: salary ($5000.00)"));

    tally(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $3.50"))
        .stdout(predicate::str::contains("Total revenue:  $5000.00"))
        .stdout(predicate::str::contains("Profit:         $4996.50"));
}

#[test]
fn test_add_duplicate_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .success();

    tally(&dir)
        .args(["add", "coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry already exists"));

    // The duplicate did not change the total
    tally(&dir)
        .arg("summary")
        .assert()
        .stdout(predicate::str::contains("Total expenses: $3.50"));
}

#[test]
fn test_clear_message_and_undo() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .success();

    tally(&dir)
        .args(["clear", "--category", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared all expenses"));

    tally(&dir)
        .arg("summary")
        .assert()
        .stdout(predicate::str::contains("Total expenses: $0.00"));

    // Undo works in a fresh process: the snapshot is persisted
    tally(&dir)
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Undid the last change"));

    tally(&dir)
        .arg("summary")
        .assert()
        .stdout(predicate::str::contains("Total expenses: $3.50"));
}

#[test]
fn test_undo_without_history_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("undo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to undo"));
}

#[test]
fn test_list_shows_entries() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "rent", "1200", "--date", "2026-08-01"])
        .assert()
        .success();

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed all entries"))
        .stdout(predicate::str::contains("rent"))
        .stdout(predicate::str::contains("$1200.00"));
}

#[test]
fn test_find_filters_output() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "morning coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .success();
    tally(&dir)
        .args(["add", "rent", "1200", "--date", "2026-08-02"])
        .assert()
        .success();

    tally(&dir)
        .args(["find", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries listed"))
        .stdout(predicate::str::contains("morning coffee"))
        .stdout(predicate::str::contains("rent").not());
}

#[test]
fn test_delete_by_index() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .success();

    tally(&dir)
        .args(["delete", "expense", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: coffee ($3.50)"));

    tally(&dir)
        .args(["delete", "expense", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("index provided is invalid"));
}

#[test]
fn test_edit_by_index() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .success();

    tally(&dir)
        .args(["edit", "expense", "1", "--amount", "4.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited expense: coffee ($4.00)"));
}

#[test]
fn test_account_lifecycle() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["account", "new", "business"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account: business"));

    tally(&dir)
        .args(["account", "switch", "business"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to account: business"));

    tally(&dir)
        .args(["add", "invoice", "250", "--category", "revenue", "--date", "2026-08-03"])
        .assert()
        .success();

    tally(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main"))
        .stdout(predicate::str::contains("business"))
        .stdout(predicate::str::contains("$250.00"));

    tally(&dir)
        .args(["account", "remove", "business"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active account is now: main"));
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "coffee", "3.50", "--date", "2026-08-01"])
        .assert()
        .success();

    tally(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account,Category,Date,Description,Amount"))
        .stdout(predicate::str::contains("main,expense,2026-08-01,coffee,3.50"));
}
