//! Orchestration of a single branch switch.
//!
//! locate repository → list branches → pick → switch (when needed) → report.

use crate::branch::CandidateList;
use crate::error::Result;
use crate::interactive::Picker;
use crate::output::Output;
use crate::repo;
use crate::session::{SelectionOutcome, SelectionSession};
use crate::vcs::BranchBackend;

use std::path::{Path, PathBuf};

/// How a run ended. Every variant is a successful exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    NotARepository,
    Cancelled { current: Option<String> },
    Unchanged { current: String },
    Switched { to: String },
}

pub(crate) struct BranchSwitchController<B, P> {
    work_dir: PathBuf,
    backend: B,
    picker: P,
    locate: fn(&Path) -> bool,
}

impl<B: BranchBackend, P: Picker> BranchSwitchController<B, P> {
    pub(crate) fn new(work_dir: impl Into<PathBuf>, backend: B, picker: P) -> Self {
        Self {
            work_dir: work_dir.into(),
            backend,
            picker,
            locate: repo::locate,
        }
    }

    /// Replace the repository detection used by [`Self::resolve`].
    #[cfg(test)]
    fn with_locator(mut self, locate: fn(&Path) -> bool) -> Self {
        self.locate = locate;
        self
    }

    /// Resolve and report one run.
    pub(crate) fn run(&mut self, output: &Output) -> Result<()> {
        let outcome = self.resolve()?;
        output.report(&outcome);
        Ok(())
    }

    /// Perform the run without printing anything.
    pub(crate) fn resolve(&mut self) -> Result<RunOutcome> {
        if !(self.locate)(&self.work_dir) {
            log::info!("{} is not inside a git repository", self.work_dir.display());
            return Ok(RunOutcome::NotARepository);
        }

        let current = self.backend.current_branch()?;
        let listing = self.backend.branch_listing()?;
        let candidates = CandidateList::new(current.as_deref(), &listing)?;
        log::debug!(
            "offering {} branches (current: {:?})",
            candidates.len(),
            candidates.current()
        );

        let outcome = self.picker.pick(SelectionSession::new(candidates))?;
        match outcome {
            SelectionOutcome::Cancelled => {
                log::info!("selection cancelled");
                Ok(RunOutcome::Cancelled { current })
            }
            SelectionOutcome::Confirmed(name) if current.as_deref() == Some(name.as_str()) => {
                log::info!("{name} is already checked out");
                Ok(RunOutcome::Unchanged { current: name })
            }
            SelectionOutcome::Confirmed(name) => {
                self.backend.switch_branch(&name)?;
                log::info!("switched to {name}");
                Ok(RunOutcome::Switched { to: name })
            }
        }
    }
}
