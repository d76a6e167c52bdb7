use crate::common::outside_repo;
use predicates::prelude::*;

#[test]
fn test_valid_config_is_accepted() {
    let (dir, mut cmd) = outside_repo();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[ui.colors]\naccent = \"light-green\"\nselection_bg = \"#3366ff\"\n",
    )
    .expect("Failed to write config");

    cmd.env("SGB_CONFIG", &path)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("not a git repository"));
}

#[test]
fn test_invalid_config_fails() {
    let (dir, mut cmd) = outside_repo();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui.colors]\naccent = \"ultraviolet\"\n")
        .expect("Failed to write config");

    cmd.env("SGB_CONFIG", &path)
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_unknown_config_key_fails() {
    let (dir, mut cmd) = outside_repo();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntheme = \"dark\"\n").expect("Failed to write config");

    cmd.env("SGB_CONFIG", &path).assert().failure().code(1);
}
