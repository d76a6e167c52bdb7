//! Candidate list construction from `git branch --list` output.

use crate::error::{Error, Result};

/// Ordered list of branches offered by the picker.
///
/// When a current branch exists it sits at index 0 and appears nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidateList {
    branches: Vec<String>,
    current: Option<String>,
}

impl CandidateList {
    /// Build the list from the current branch (`None` on a detached HEAD) and
    /// the raw branch listing.
    pub(crate) fn new(current: Option<&str>, listing: &str) -> Result<Self> {
        let current = current.filter(|name| !name.is_empty());

        let mut branches: Vec<String> = current.iter().map(|name| name.to_string()).collect();
        branches.extend(
            parse_listing(listing)
                .filter(|name| Some(*name) != current)
                .map(str::to_string),
        );

        if branches.is_empty() {
            return Err(Error::NoBranches);
        }

        Ok(Self {
            branches,
            current: current.map(str::to_string),
        })
    }

    /// Branch names in display order.
    pub(crate) fn branches(&self) -> &[String] {
        &self.branches
    }

    pub(crate) fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&str> {
        self.branches.get(idx).map(String::as_str)
    }

    /// Whether the entry at `idx` is the checked-out branch.
    pub(crate) fn is_current(&self, idx: usize) -> bool {
        idx == 0 && self.current.is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.branches.len()
    }
}

/// Branch names from a `git branch --list` listing, minus the `*` entry.
///
/// Accepts both `\n` and `\r\n` line endings.
fn parse_listing(listing: &str) -> impl Iterator<Item = &str> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('*'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_branch_first() {
        let list = CandidateList::new(Some("dev"), "  alpha\n* dev\n  main\n").unwrap();
        assert_eq!(list.branches(), &["dev", "alpha", "main"]);
        assert_eq!(list.current(), Some("dev"));
        assert!(list.is_current(0));
        assert!(!list.is_current(1));
    }

    #[test]
    fn test_crlf_listing() {
        let list = CandidateList::new(Some("main"), "  dev\r\n* main\r\n  feature/x\r\n").unwrap();
        assert_eq!(list.branches(), &["main", "dev", "feature/x"]);
    }

    #[test]
    fn test_current_never_duplicated() {
        // An unmarked copy of the current branch must not produce a second entry
        let list = CandidateList::new(Some("main"), "  main\n  dev\n* main\n  main\n").unwrap();
        assert_eq!(list.branches(), &["main", "dev"]);
    }

    #[test]
    fn test_current_at_index_zero_for_arbitrary_listings() {
        let listings = [
            "",
            "\n\n",
            "* main\n",
            "  dev\n",
            "  main\r\n  main\r\n",
            "* (HEAD detached at 1a2b3c4)\n  main\n",
            "  a\n  b\n* c\n  main\n  d\n",
        ];
        for listing in listings {
            let list = CandidateList::new(Some("main"), listing).unwrap();
            assert_eq!(list.get(0), Some("main"), "listing {listing:?}");
            let count = list.branches().iter().filter(|b| *b == "main").count();
            assert_eq!(count, 1, "listing {listing:?}");
        }
    }

    #[test]
    fn test_unborn_branch_without_listing() {
        // Fresh repository: HEAD names a branch that has no commits yet
        let list = CandidateList::new(Some("main"), "").unwrap();
        assert_eq!(list.branches(), &["main"]);
    }

    #[test]
    fn test_detached_head() {
        let list =
            CandidateList::new(None, "* (HEAD detached at 1a2b3c4)\n  dev\n  main\n").unwrap();
        assert_eq!(list.branches(), &["dev", "main"]);
        assert_eq!(list.current(), None);
        assert!(!list.is_current(0));
    }

    #[test]
    fn test_empty_current_treated_as_detached() {
        let list = CandidateList::new(Some(""), "  dev\n").unwrap();
        assert_eq!(list.current(), None);
        assert_eq!(list.branches(), &["dev"]);
    }

    #[test]
    fn test_no_branches_is_error() {
        let result = CandidateList::new(None, "* (HEAD detached at 1a2b3c4)\n");
        assert!(matches!(result, Err(Error::NoBranches)));
    }

    #[test]
    fn test_len_and_get() {
        let list = CandidateList::new(Some("main"), "  dev\n").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), Some("dev"));
        assert_eq!(list.get(2), None);
    }
}
