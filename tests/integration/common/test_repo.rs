use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use tempfile::TempDir;

/// Git repository in a temporary directory, with `main` checked out.
pub struct TestRepo {
    temp_dir: TempDir,
    repo_path: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let repo_path = temp_dir.path().join("repo");
        fs::create_dir_all(&repo_path).expect("Failed to create repo directory");

        run_git(&repo_path, &["init", "-b", "main"]);
        run_git(&repo_path, &["config", "user.email", "test@example.com"]);
        run_git(&repo_path, &["config", "user.name", "Test User"]);

        fs::write(repo_path.join("README.md"), "# Test Repository\n")
            .expect("Failed to write README");
        run_git(&repo_path, &["add", "README.md"]);
        run_git(&repo_path, &["commit", "-m", "Initial commit"]);

        Self {
            temp_dir,
            repo_path,
        }
    }

    /// Repository with extra branches created from `main`.
    pub fn with_branches(branches: &[&str]) -> Self {
        let repo = Self::new();
        for branch in branches {
            run_git(&repo.repo_path, &["branch", branch]);
        }
        repo
    }

    /// An sgb command running inside the repository.
    pub fn sgb(&self) -> Command {
        sgb_in(&self.repo_path, self.temp_dir.path())
    }

    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    pub fn current_branch(&self) -> String {
        git_stdout(&self.repo_path, &["branch", "--show-current"])
    }
}

/// An sgb command running in an empty directory outside any repository.
pub fn outside_repo() -> (TempDir, Command) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let cmd = sgb_in(temp_dir.path(), temp_dir.path());
    (temp_dir, cmd)
}

/// Isolates config and logging from the user's environment.
fn sgb_in(dir: &Path, scratch: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sgb").expect("Failed to find sgb binary");
    cmd.current_dir(dir)
        .env("SGB_CONFIG", scratch.join("missing-config.toml"))
        .env("SGB_LOG", "off")
        .env_remove("NO_COLOR");
    cmd
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git");
    if !output.status.success() {
        panic!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
