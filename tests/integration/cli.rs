use crate::common::outside_repo;
use predicates::prelude::*;

#[test]
fn test_version() {
    let (_dir, mut cmd) = outside_repo();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sgb "));
}

#[test]
fn test_help_describes_picker_keys() {
    let (_dir, mut cmd) = outside_repo();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("[Ctrl+U]"));
}

#[test]
fn test_positional_argument_rejected() {
    let (_dir, mut cmd) = outside_repo();
    cmd.arg("main").assert().failure().code(2);
}

#[test]
fn test_color_and_no_color_conflict() {
    let (_dir, mut cmd) = outside_repo();
    cmd.args(["--color", "always", "--no-color"])
        .assert()
        .failure()
        .code(2);
}
