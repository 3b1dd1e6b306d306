use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("csv-scout").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Summarize the column headers of every CSV file in a directory",
        ))
        .stdout(predicate::str::contains("DIRECTORY"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("csv-scout").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("csv-scout"));
}

#[test]
fn test_missing_directory_argument() {
    let mut cmd = Command::cargo_bin("csv-scout").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_nonexistent_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");

    let mut cmd = Command::cargo_bin("csv-scout").unwrap();
    cmd.arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory not found"));

    assert!(!missing.join("header_analysis.csv").exists());
}

#[test]
fn test_path_to_a_file_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.csv");
    std::fs::write(&file, "a,b\n").unwrap();

    let mut cmd = Command::cargo_bin("csv-scout").unwrap();
    cmd.arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory not found"));
}

#[test]
fn test_completion_message_names_the_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.csv"), "id\n").unwrap();

    let mut cmd = Command::cargo_bin("csv-scout").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Analysis complete. Results saved to:",
        ))
        .stdout(predicate::str::contains("header_analysis.csv"));
}
