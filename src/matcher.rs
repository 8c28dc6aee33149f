//! Ignore-pattern matching.
//!
//! The collector only asks "is this path ignored?". [`GitignoreMatcher`] answers
//! with standard gitignore grammar; tests and library users can hand in any other
//! [`IgnoreMatcher`], including a plain closure.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Decides whether a path is excluded by ignore patterns.
pub trait IgnoreMatcher: Send + Sync {
    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool;
}

impl<F> IgnoreMatcher for F
where
    F: Fn(&Path, bool) -> bool + Send + Sync,
{
    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self(path, is_dir)
    }
}

/// Matcher backed by a gitignore-style pattern file.
#[derive(Debug, Clone)]
pub struct GitignoreMatcher {
    inner: Gitignore,
}

impl GitignoreMatcher {
    /// Loads patterns from `file`, anchored at `root`.
    ///
    /// Returns `None` when the file does not exist, cannot be read, or holds
    /// no patterns; matching is then simply disabled. Lines that fail to parse
    /// are dropped with a warning while the rest of the file still applies.
    pub fn from_file(root: &Path, file: &Path) -> Option<Self> {
        if !file.is_file() {
            tracing::debug!("No ignore file at {}", file.display());
            return None;
        }
        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(file) {
            tracing::warn!("Problem reading {}: {}", file.display(), err);
        }
        match builder.build() {
            Ok(inner) if inner.is_empty() => None,
            Ok(inner) => Some(Self { inner }),
            Err(err) => {
                tracing::warn!("Ignoring patterns from {}: {}", file.display(), err);
                None
            }
        }
    }

    /// Number of patterns that were loaded.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl IgnoreMatcher for GitignoreMatcher {
    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.inner.matched(path, is_dir).is_ignore()
    }
}
