use std::process::Command;

fn main() {
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    // Release builds are tagged; anything else carries the commit it was built from
    let label = match head_commit() {
        Some(commit) if !is_release_tag(&version) => format!("{version} ({commit})"),
        _ => version,
    };
    println!("cargo:rustc-env=SGB_VERSION_LABEL={label}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
}

fn head_commit() -> Option<String> {
    git(&["rev-parse", "--short=7", "HEAD"])
}

fn is_release_tag(version: &str) -> bool {
    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|tag| tag.trim_start_matches('v') == version))
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    let stdout = String::from_utf8(output.stdout).ok()?;
    let stdout = stdout.trim();
    (output.status.success() && !stdout.is_empty()).then(|| stdout.to_string())
}
