//! Repository detection.
//!
//! Walks from a starting directory up to the filesystem root looking for a
//! `.git` entry. `.git` may be a directory or, inside linked worktrees and
//! submodules, a plain file.

use std::path::Path;

/// Name of the on-disk repository marker.
pub(crate) const MARKER: &str = ".git";

/// Returns true if `start` or any of its ancestors contains a `.git` entry.
pub(crate) fn locate(start: &Path) -> bool {
    locate_with(start, has_marker)
}

/// Same as [`locate`] but with a caller-supplied marker probe.
///
/// Ancestors are visited nearest first and the walk stops at the first hit.
/// The root directory is always the last level probed.
pub(crate) fn locate_with<F>(start: &Path, mut probe: F) -> bool
where
    F: FnMut(&Path) -> bool,
{
    for dir in start.ancestors() {
        if probe(dir) {
            log::debug!("repository marker found at {}", dir.display());
            return true;
        }
    }
    log::debug!(
        "no repository marker between {} and the filesystem root",
        start.display()
    );
    false
}

/// Probe a single directory. I/O errors count as "no marker here".
fn has_marker(dir: &Path) -> bool {
    match dir.join(MARKER).try_exists() {
        Ok(found) => found,
        Err(e) => {
            log::debug!("cannot probe {}: {e}", dir.display());
            false
        }
    }
}
