//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gitsub() -> Command {
    Command::cargo_bin("gitsub").unwrap()
}

#[test]
fn test_version_flag() {
    gitsub()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitsub"));
}

#[test]
fn test_help_flag() {
    gitsub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Clone only the subdirectories you need",
        ));
}

#[test]
fn test_no_subcommand_prints_help_to_stdout() {
    gitsub()
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Usage: gitsub"));
}

#[test]
fn test_clone_without_arguments_fails() {
    gitsub()
        .arg("clone")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Usage: gitsub clone"))
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_single_non_github_argument_is_usage_error() {
    let work_dir = TempDir::new().unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .args(["clone", "https://github.com/owner/repo"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Usage: gitsub clone"))
        .stderr(predicate::str::contains("Usage error"));
}

#[test]
fn test_invalid_repository_url() {
    let work_dir = TempDir::new().unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .args(["clone", "ftp://example.com/repo", "docs"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid repository URL"));
}

#[test]
fn test_invalid_directory() {
    let work_dir = TempDir::new().unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .args(["clone", "https://github.com/owner/repo", "docs", " / "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid directory path"));
}

#[test]
fn test_output_directory_exists() {
    let work_dir = TempDir::new().unwrap();
    fs::create_dir(work_dir.path().join("repo")).unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .args(["clone", "https://github.com/owner/repo", "docs"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Output directory already exists: repo"));
}

#[test]
fn test_output_override_exists() {
    let work_dir = TempDir::new().unwrap();
    fs::write(work_dir.path().join("taken"), b"").unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .args([
            "clone",
            "-o",
            "./taken/",
            "https://github.com/owner/repo/tree/main/docs",
        ])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_git_missing_from_path() {
    let work_dir = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .env("PATH", empty_path.path())
        .args(["clone", "https://github.com/owner/repo", "docs"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Git unavailable"));

    assert!(!work_dir.path().join("repo").exists());
}

#[test]
fn test_dry_run_github_tree_url() {
    let work_dir = TempDir::new().unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .args([
            "clone",
            "--dry-run",
            "https://github.com/owner/repo/tree/dev/src/lib",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("git init repo"))
        .stdout(predicate::str::contains(
            "git -C repo remote add origin https://github.com/owner/repo",
        ))
        .stdout(predicate::str::contains(
            "git -C repo sparse-checkout set --cone --end-of-options src/lib",
        ))
        .stdout(predicate::str::contains(
            "git -C repo fetch --filter=blob:none --depth=1 --end-of-options origin dev",
        ))
        .stdout(predicate::str::contains("git -C repo checkout dev --"));

    assert!(!work_dir.path().join("repo").exists());
}

#[test]
fn test_dry_run_explicit_form_with_overrides() {
    let work_dir = TempDir::new().unwrap();

    gitsub()
        .current_dir(work_dir.path())
        .args([
            "clone",
            "--dry-run",
            "--branch",
            "release",
            "--output",
            "checkout",
            "git@github.com:owner/repo.git",
            "docs",
            "api/",
            "docs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "git -C checkout sparse-checkout set --cone --end-of-options docs api\n",
        ))
        .stdout(predicate::str::contains("git -C checkout checkout release --"));
}
