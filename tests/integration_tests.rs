//! Integration tests for the WSM CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURE_FILES: [&str; 6] = [
    "customers.yaml",
    "vehicles.yaml",
    "projects.yaml",
    "cages.yaml",
    "team.yaml",
    "stats.yaml",
];

/// A wsm command isolated from the user's config and environment
fn wsm(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wsm").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("WSM_FIXTURES")
        .env_remove("WSM_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Copy the shipped fixture set into a fresh directory
fn copy_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let source = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    for name in FIXTURE_FILES {
        fs::copy(source.join(name), tmp.path().join(name)).unwrap();
    }
    tmp
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("restoration workshop"))
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("cage"));
}

#[test]
fn test_version_displays() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wsm"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wsm"));
}

// ============================================================================
// Project Tests
// ============================================================================

#[test]
fn test_project_list_shows_all_projects() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proj-001"))
        .stdout(predicate::str::contains("proj-006"))
        .stdout(predicate::str::contains("6 project(s) found."));
}

#[test]
fn test_project_list_search_and_status() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "list", "--search", "MUSTANG", "-f", "id"])
        .assert()
        .success()
        .stdout("proj-001\nproj-006\n");

    wsm(&home)
        .args(["project", "list", "--search", "mustang", "--status", "quote", "-f", "id"])
        .assert()
        .success()
        .stdout("proj-006\n");
}

#[test]
fn test_project_list_count() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "list", "--status", "on_hold", "--count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_project_list_rejects_unknown_status() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "list", "--status", "abandoned"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("abandoned"));
}

#[test]
fn test_project_list_csv_uses_raw_status() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "list", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,name,customer,type,status,progress,target"))
        .stdout(predicate::str::contains("in_progress"));
}

#[test]
fn test_project_show_detail() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "show", "proj-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1969 Mustang Boss 429 Restoration"))
        .stdout(predicate::str::contains("In Progress"))
        .stdout(predicate::str::contains("R2,250,000"))
        .stdout(predicate::str::contains("View all 5 parts:"));
}

#[test]
fn test_project_show_quote_has_tbd_dates() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "show", "proj-006"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TBD"))
        .stdout(predicate::str::contains("No parts ordered"));
}

#[test]
fn test_project_show_missing_is_error() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["project", "show", "proj-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("proj-999"));
}

#[test]
fn test_project_show_json() {
    let home = TempDir::new().unwrap();
    let output = wsm(&home)
        .args(["project", "show", "proj-002", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "proj-002");
    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["customerId"], "cust-002");
}

// ============================================================================
// Job / Part Tests
// ============================================================================

#[test]
fn test_job_list_filters_by_department_and_status() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["job", "list", "--search", "primer", "--department", "paint", "-f", "id"])
        .assert()
        .success()
        .stdout("t-007\n");
}

#[test]
fn test_job_list_unknown_project_is_error() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["job", "list", "--project", "proj-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("proj-999"));
}

#[test]
fn test_job_board_groups_by_status() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["job", "list", "--project", "proj-001", "--board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PENDING ("))
        .stdout(predicate::str::contains("IN PROGRESS ("))
        .stdout(predicate::str::contains("BLOCKED (0)"))
        .stdout(predicate::str::contains("COMPLETE ("));
}

#[test]
fn test_job_board_json_has_four_columns() {
    let home = TempDir::new().unwrap();
    let output = wsm(&home)
        .args(["job", "list", "--board", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let columns = value.as_array().unwrap();
    assert_eq!(columns.len(), 4);
    assert_eq!(columns[0]["status"], "pending");
    assert_eq!(columns[3]["status"], "complete");
}

#[test]
fn test_part_list_in_transit() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["part", "list", "--search", "dynacorn", "--status", "in_transit", "-f", "id"])
        .assert()
        .success()
        .stdout("part-003\npart-004\n");
}

// ============================================================================
// Cage / Customer / Team Tests
// ============================================================================

#[test]
fn test_cage_list_empty_cages() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["cage", "list", "--status", "empty", "-f", "id"])
        .assert()
        .success()
        .stdout("C-025\nC-026\n");
}

#[test]
fn test_cage_label_preview() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["cage", "label", "C-012"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C-012"))
        .stdout(predicate::str::contains("Row C, Bay 2"))
        .stdout(predicate::str::contains("1969 Mustang (proj-001)"))
        .stdout(predicate::str::contains("Parts Count  56"));
}

#[test]
fn test_cage_label_respects_config() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".wsm")).unwrap();
    fs::write(
        home.path().join(".wsm/config.yaml"),
        "label_name_words: 3\n",
    )
    .unwrap();

    wsm(&home)
        .args(["cage", "label", "C-012"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1969 Mustang Boss (proj-001)"));
}

#[test]
fn test_cage_label_missing_cage() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["cage", "label", "C-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("C-999"));
}

#[test]
fn test_customer_show_lists_projects() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["customer", "show", "cust-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Mitchell"))
        .stdout(predicate::str::contains("2 (1 active)"))
        .stdout(predicate::str::contains("proj-006"));
}

#[test]
fn test_customer_list_search_by_phone() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["customer", "list", "--search", "456-7890", "-f", "id"])
        .assert()
        .success()
        .stdout("cust-004\n");
}

#[test]
fn test_team_list_by_department() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["team", "list", "--department", "paint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Willem van der Berg"))
        .stdout(predicate::str::contains("Paint"))
        .stdout(predicate::str::contains("1 team member(s) found."));
}

// ============================================================================
// Status / Validate / Config Tests
// ============================================================================

#[test]
fn test_status_shows_authored_stats() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workshop Dashboard"))
        .stdout(predicate::str::contains("85"))
        .stdout(predicate::str::contains("Recent Projects"));
}

#[test]
fn test_status_derived_json() {
    let home = TempDir::new().unwrap();
    let output = wsm(&home)
        .args(["status", "--derived", "--as-of", "2024-05-02", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["totalProjects"], 85);
    assert_eq!(value["derived"]["totalProjects"], 6);
    assert_eq!(value["derived"]["overdueTaskCount"], 1);
    assert_eq!(value["drift"].as_array().unwrap().len(), 8);
}

#[test]
fn test_status_as_of_requires_derived() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["status", "--as-of", "2024-05-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--derived"));
}

#[test]
fn test_validate_builtin_fixtures_pass() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All fixtures passed validation!"));
}

#[test]
fn test_validate_reports_duplicate_cage() {
    let home = TempDir::new().unwrap();
    let fixtures = copy_fixtures();
    let cages = fs::read_to_string(fixtures.path().join("cages.yaml")).unwrap();
    fs::write(
        fixtures.path().join("cages.yaml"),
        cages.replace("number: C-026", "number: C-025"),
    )
    .unwrap();

    wsm(&home)
        .args(["validate", "--fixtures"])
        .arg(fixtures.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("C-025"))
        .stdout(predicate::str::contains("duplicate-cage"));
}

#[test]
fn test_fixtures_directory_missing_file() {
    let home = TempDir::new().unwrap();
    let fixtures = copy_fixtures();
    fs::remove_file(fixtures.path().join("team.yaml")).unwrap();

    wsm(&home)
        .args(["project", "list", "--fixtures"])
        .arg(fixtures.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("team.yaml"));
}

#[test]
fn test_fixtures_from_environment() {
    let home = TempDir::new().unwrap();
    let fixtures = copy_fixtures();
    let customers = fs::read_to_string(fixtures.path().join("customers.yaml")).unwrap();
    fs::write(
        fixtures.path().join("customers.yaml"),
        customers.replace("John Mitchell", "Jan Mitchell"),
    )
    .unwrap();

    wsm(&home)
        .env("WSM_FIXTURES", fixtures.path())
        .args(["customer", "list", "--search", "jan", "-f", "id"])
        .assert()
        .success()
        .stdout("cust-001\n");
}

#[test]
fn test_fixtures_root_file_beats_subdirectory_copy() {
    let home = TempDir::new().unwrap();
    let fixtures = copy_fixtures();
    let archive = fixtures.path().join("archive");
    fs::create_dir_all(&archive).unwrap();
    fs::write(archive.join("projects.yaml"), "[]\n").unwrap();

    wsm(&home)
        .args(["project", "list", "--count", "--fixtures"])
        .arg(fixtures.path())
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["config", "show", "-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recent_limit: 5"))
        .stdout(predicate::str::contains("label_name_words: 2"));

    wsm(&home)
        .args(["config", "show", "recent_limit"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_config_show_unknown_key() {
    let home = TempDir::new().unwrap();
    wsm(&home)
        .args(["config", "show", "editor"])
        .assert()
        .failure();
}
