use crate::common::{TestRepo, outside_repo};
use predicates::prelude::*;

#[test]
fn test_outside_repository_reports_and_succeeds() {
    let (_dir, mut cmd) = outside_repo();
    cmd.arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SGB - A tool for easier switching of git branches",
        ))
        .stdout(predicate::str::contains(
            "The current folder is not a git repository.",
        ));
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    let (_dir, mut cmd) = outside_repo();
    cmd.arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_color_always_paints_banner() {
    let (_dir, mut cmd) = outside_repo();
    cmd.args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_no_color_env_disables_color() {
    let (_dir, mut cmd) = outside_repo();
    cmd.env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_repository_without_terminal_fails() {
    let repo = TestRepo::with_branches(&["dev", "feature/x"]);

    repo.sgb()
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));

    assert_eq!(repo.current_branch(), "main");
}

#[test]
fn test_subdirectory_of_repository_is_detected() {
    let repo = TestRepo::new();
    let nested = repo.path().join("a").join("b");
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");

    let mut cmd = repo.sgb();
    cmd.current_dir(&nested)
        .arg("--no-color")
        .assert()
        .failure()
        .stdout(predicate::str::contains("not a git repository").not())
        .stderr(predicate::str::contains("interactive terminal"));
}
