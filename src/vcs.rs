//! Version-control backend abstraction.

mod git;

pub(crate) use git::GitCli;

use crate::error::Result;

/// Branch operations the switcher needs from the version-control system.
pub(crate) trait BranchBackend {
    /// Name of the checked-out branch, or `None` on a detached HEAD.
    fn current_branch(&self) -> Result<Option<String>>;

    /// Raw local branch listing, one branch per line, current branch
    /// prefixed with `*`.
    fn branch_listing(&self) -> Result<String>;

    /// Check out `branch` in the working tree.
    fn switch_branch(&self, branch: &str) -> Result<()>;
}
