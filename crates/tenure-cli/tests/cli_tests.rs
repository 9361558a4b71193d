use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use tenure_core::models::templates::{ONBOARDING_TASKS, OFFBOARDING_TASKS};

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn tenure_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("tenure").expect("Failed to find tenure binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

fn add_active_employee(db_arg: &str, name: &str, salary: &str) {
    tenure_cmd(db_arg)
        .args([
            "employee",
            "add",
            name,
            "--salary",
            salary,
            "--hire-date",
            "2020-01-01",
            "--active",
        ])
        .assert()
        .success();
}

fn start_offboarding(db_arg: &str) {
    tenure_cmd(db_arg)
        .args([
            "offboarding",
            "start",
            "1",
            "--type",
            "resignation",
            "--exit-date",
            "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Started offboarding for employee 1"))
        .stdout(predicate::str::contains("○ Pending Exit"));
}

fn complete_all_but_last(db_arg: &str) {
    for (_, task) in &OFFBOARDING_TASKS[..OFFBOARDING_TASKS.len() - 1] {
        tenure_cmd(db_arg)
            .args(["offboarding", "task", "1", *task])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_add_employee_starts_onboarding() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tenure_cmd(db_path.to_str().unwrap())
        .args([
            "employee",
            "add",
            "Ana Souza",
            "--department",
            "Engineering",
            "--salary",
            "4200.50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created employee with ID: 1"))
        .stdout(predicate::str::contains("- Status: onboarding"))
        .stdout(predicate::str::contains("- Monthly salary: 4200.50"));
}

#[test]
fn test_cli_list_empty_roster() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tenure_cmd(db_path.to_str().unwrap())
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));
}

#[test]
fn test_cli_default_command_lists_roster() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_active_employee(db_arg, "Lee Chen", "3000");

    tenure_cmd(db_arg)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Lee Chen (ID: 1)"))
        .stdout(predicate::str::contains("- **Status**: active"));
}

#[test]
fn test_cli_onboarding_advance_and_task() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tenure_cmd(db_arg)
        .args(["employee", "add", "Ana Souza"])
        .assert()
        .success();

    tenure_cmd(db_arg)
        .args(["onboarding", "task", "1", ONBOARDING_TASKS[0], "--by", "hr-admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Completed task: {}",
            ONBOARDING_TASKS[0]
        )))
        .stdout(predicate::str::contains("by hr-admin"));

    tenure_cmd(db_arg)
        .args(["on", "advance", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated onboarding for employee 1"))
        .stdout(predicate::str::contains("Changes made:"));
}

#[test]
fn test_cli_offboarding_requires_active_employee() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tenure_cmd(db_arg)
        .args(["employee", "add", "Still Onboarding"])
        .assert()
        .success();

    tenure_cmd(db_arg)
        .args([
            "offboarding",
            "start",
            "1",
            "--type",
            "termination",
            "--exit-date",
            "2030-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transition"));
}

#[test]
fn test_cli_unknown_task_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_active_employee(db_arg, "Lee Chen", "3000");
    start_offboarding(db_arg);

    tenure_cmd(db_arg)
        .args(["off", "task", "1", "badge_return"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task 'badge_return' not found"));
}

#[test]
fn test_cli_offboarding_completes_with_settlement() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_active_employee(db_arg, "Lee Chen", "3000");
    start_offboarding(db_arg);
    complete_all_but_last(db_arg);

    let (_, last) = OFFBOARDING_TASKS[OFFBOARDING_TASKS.len() - 1];
    tenure_cmd(db_arg)
        .args(["offboarding", "task", "1", last])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: ✓ Completed"))
        .stdout(predicate::str::contains(
            "Success: Offboarding for employee 1 completed, 2 documents generated",
        ));

    tenure_cmd(db_arg)
        .args(["settlement", "documents", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("final-settlement-1.md"))
        .stdout(predicate::str::contains("experience-letter-1.md"));

    tenure_cmd(db_arg)
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));

    tenure_cmd(db_arg)
        .args(["employee", "list", "--archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lee Chen"))
        .stdout(predicate::str::contains("- **Payroll**: removed"));

    tenure_cmd(db_arg)
        .args(["offboarding", "task", "1", last, "--undo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transition"));
}

#[test]
fn test_cli_failed_settlement_then_retry() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_active_employee(db_arg, "No Salary", "0");
    start_offboarding(db_arg);
    complete_all_but_last(db_arg);

    let (_, last) = OFFBOARDING_TASKS[OFFBOARDING_TASKS.len() - 1];
    tenure_cmd(db_arg)
        .args(["offboarding", "task", "1", last])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: Settlement failed at document generation",
        ))
        .stderr(predicate::str::contains("tenure offboarding retry 1"));

    tenure_cmd(db_arg)
        .args(["offboarding", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Settlement: failed at document generation",
        ))
        .stdout(predicate::str::contains(
            "- Already applied: archive, payroll removal",
        ));

    tenure_cmd(db_arg)
        .args(["employee", "pay", "1", "--salary", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly salary: 3000"));

    tenure_cmd(db_arg)
        .args(["offboarding", "retry", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Settlement: completed"))
        .stdout(predicate::str::contains("2 documents generated"));
}

#[test]
fn test_cli_export_json_and_csv() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_active_employee(db_arg, "Lee Chen", "3000");
    start_offboarding(db_arg);

    tenure_cmd(db_arg)
        .args(["offboarding", "export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target_exit_date\": \"2025-01-01\""))
        .stdout(predicate::str::contains("\"status\": \"pending_exit\""))
        .stdout(predicate::str::contains("monthly_salary").not());

    let output = temp_dir.path().join("exit.csv");
    tenure_cmd(db_arg)
        .args([
            "offboarding",
            "export",
            "1",
            "--format",
            "csv",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Exported offboarding"));

    let csv = std::fs::read_to_string(&output).expect("Export file should exist");
    assert_eq!(csv.lines().count(), 1 + OFFBOARDING_TASKS.len());
}

#[test]
fn test_cli_settlement_show() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_active_employee(db_arg, "Lee Chen", "3000");
    start_offboarding(db_arg);

    tenure_cmd(db_arg)
        .args(["settlement", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Final settlement: Lee Chen (ID: 1)"))
        .stdout(predicate::str::contains("- Years of service: 5.01"))
        .stdout(predicate::str::contains("| Basic salary | 3000"));
}
