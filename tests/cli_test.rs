use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dotsweep() -> Command {
    Command::cargo_bin("dotsweep").unwrap()
}

/// Directory with two junk files and one junk folder.
fn littered_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".DS_Store"), b"\0").unwrap();
    std::fs::write(dir.path().join("._doc.pdf"), b"fork").unwrap();
    std::fs::write(dir.path().join("doc.pdf"), b"real").unwrap();
    std::fs::create_dir(dir.path().join(".fseventsd")).unwrap();
    dir
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    dotsweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quick"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("volumes"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    dotsweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dotsweep"));
}

#[test]
fn test_no_subcommand_shows_usage() {
    dotsweep()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ─── Clean command ───────────────────────────────────────────────────────────

#[test]
fn test_clean_missing_target_fails() {
    dotsweep()
        .args(["clean", "/nonexistent/path/xyz123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_clean_dry_run_counts_without_deleting() {
    let dir = littered_dir();

    dotsweep()
        .args(["clean", "--dry-run", "--format", "quiet"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2  1"));

    assert!(dir.path().join(".DS_Store").exists());
    assert!(dir.path().join(".fseventsd").exists());
}

#[test]
fn test_clean_yes_deletes_markers() {
    let dir = littered_dir();

    dotsweep()
        .args(["clean", "--yes", "--format", "quiet"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2  1"));

    assert!(!dir.path().join(".DS_Store").exists());
    assert!(!dir.path().join("._doc.pdf").exists());
    assert!(!dir.path().join(".fseventsd").exists());
    assert!(dir.path().join("doc.pdf").exists());
}

#[test]
fn test_clean_json_output() {
    let dir = littered_dir();

    dotsweep()
        .args(["clean", "--dry-run", "--format", "json"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files_deleted\": 2"))
        .stdout(predicate::str::contains("\"dirs_deleted\": 1"))
        .stdout(predicate::str::contains("\"mode\": \"dry_run\""));
}

// ─── Check command ───────────────────────────────────────────────────────────

#[test]
fn test_check_reports_markers() {
    let dir = littered_dir();

    dotsweep()
        .args(["check", "--format", "quiet"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("markers"));
}

#[test]
fn test_check_clean_directory() {
    let dir = TempDir::new().unwrap();

    dotsweep()
        .args(["check", "--format", "quiet"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn test_check_missing_path_is_clean_not_error() {
    dotsweep()
        .args(["check", "--format", "quiet", "/nonexistent/path/xyz123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"));
}

// ─── Volumes command ─────────────────────────────────────────────────────────

#[test]
fn test_volumes_runs() {
    dotsweep().arg("volumes").assert().success();
}

#[test]
fn test_volumes_json_is_a_list() {
    dotsweep()
        .args(["volumes", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

// ─── Config command ──────────────────────────────────────────────────────────

#[test]
fn test_config_set_and_show_roundtrip() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("dotsweep.json");
    let target = TempDir::new().unwrap();

    dotsweep()
        .args(["config", "set"])
        .arg(target.path())
        .args(["--config"])
        .arg(&config_file)
        .assert()
        .success();

    dotsweep()
        .args(["config", "show", "--config"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            target.path().file_name().unwrap().to_str().unwrap(),
        ));
}

#[test]
fn test_config_env_var_override() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("dotsweep.json");
    let target = TempDir::new().unwrap();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["config", "set"])
        .arg(target.path())
        .assert()
        .success();

    assert!(config_file.exists());
}

#[test]
fn test_config_set_rejects_missing_directory() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("dotsweep.json");

    dotsweep()
        .args(["config", "set", "/nonexistent/path/xyz123", "--config"])
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_config_show_when_unset() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("dotsweep.json");

    dotsweep()
        .args(["config", "show", "--config"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No folder configured"));
}

#[test]
fn test_config_clear() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("dotsweep.json");
    let target = TempDir::new().unwrap();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["config", "set"])
        .arg(target.path())
        .assert()
        .success();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["config", "clear"])
        .assert()
        .success();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No folder configured"));
}

// ─── Quick command ───────────────────────────────────────────────────────────

#[test]
fn test_quick_dry_run_with_configured_folder() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("dotsweep.json");
    let target = littered_dir();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["config", "set"])
        .arg(target.path())
        .assert()
        .success();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["quick", "--dry-run"])
        .assert()
        .success();

    // dry run must not touch the configured folder
    assert!(target.path().join(".DS_Store").exists());
    assert!(target.path().join(".fseventsd").exists());
}

#[test]
fn test_quick_json_dry_run_reports_mode() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("dotsweep.json");
    let target = littered_dir();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["config", "set"])
        .arg(target.path())
        .assert()
        .success();

    dotsweep()
        .env("DOTSWEEP_CONFIG", &config_file)
        .args(["quick", "--dry-run", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"dry_run\""));
}
