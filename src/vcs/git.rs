//! Git backend.
//!
//! Every command is spawned with an explicit argument list, so branch names
//! are never interpreted by a shell.

use super::BranchBackend;
use crate::error::{Error, Result};

use std::path::PathBuf;
use std::process::Command;

/// Runs the `git` executable inside a working directory.
#[derive(Debug, Clone)]
pub(crate) struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    pub(crate) fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// Run git and return its stdout, failing on a non-zero exit.
    fn output(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        log::debug!("running `{command}` in {}", self.work_dir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .inspect_err(|e| log::error!("failed to spawn `{command}`: {e}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::warn!("`{command}` exited with {}: {stderr}", output.status);
            return Err(Error::GitCommandFailed { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl BranchBackend for GitCli {
    fn current_branch(&self) -> Result<Option<String>> {
        let stdout = self.output(&["branch", "--show-current"])?;
        let name = stdout.trim();
        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name.to_string()))
        }
    }

    fn branch_listing(&self) -> Result<String> {
        self.output(&["branch", "--list"])
    }

    fn switch_branch(&self, branch: &str) -> Result<()> {
        // Trailing `--` pins `branch` as a revision, never a pathspec
        self.output(&["checkout", branch, "--"])?;
        log::info!("checked out {branch}");
        Ok(())
    }
}
