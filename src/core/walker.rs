//! Filtered directory traversal
//!
//! The walker lists one directory at a time, removing hidden, private, and
//! excluded entries before a consumer ever sees them, and recurses only over
//! the kept subdirectories. Pruned subtrees are never descended into; this
//! is a correctness requirement, since excluded trees may be arbitrarily
//! large or unreadable.

use crate::core::exclude::ExcludeMatcher;
use crate::error::{DocplanError, Result};
use crate::models::config::Settings;
use std::fs;
use std::path::{Path, PathBuf};

/// One visited directory: kept subdirectory names and kept module file
/// names, both filtered and sorted for deterministic traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub dir: PathBuf,
    pub subdirs: Vec<String>,
    pub files: Vec<String>,
}

/// Filtered tree walker over a compiled exclusion set.
pub struct FilteredWalker<'a> {
    matcher: &'a ExcludeMatcher,
    settings: &'a Settings,
}

impl<'a> FilteredWalker<'a> {
    pub fn new(matcher: &'a ExcludeMatcher, settings: &'a Settings) -> Self {
        Self { matcher, settings }
    }

    /// List a single directory, filtered and sorted.
    ///
    /// Listing failures are fatal: a partial traversal cannot produce a
    /// trustworthy plan.
    pub fn read_entry(&self, dir: &Path) -> Result<WalkEntry> {
        let mut subdirs = Vec::new();
        let mut files = Vec::new();

        let entries = fs::read_dir(dir).map_err(|e| DocplanError::traversal(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| DocplanError::traversal(dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| DocplanError::traversal(dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
                if self.is_hidden_dir(&name) || self.matcher.is_excluded(&path) {
                    continue;
                }
                subdirs.push(name);
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                if !self.has_module_suffix(&name) || self.matcher.is_excluded(&path) {
                    continue;
                }
                files.push(name);
            }
        }

        subdirs.sort();
        files.sort();

        Ok(WalkEntry {
            dir: dir.to_path_buf(),
            subdirs,
            files,
        })
    }

    /// Lazy pre-order traversal from `root`.
    ///
    /// At most one directory's worth of work is outstanding at a time; a
    /// caller aborts by simply dropping the iterator.
    pub fn walk(&self, root: &Path) -> WalkIter<'_> {
        WalkIter {
            walker: self,
            pending: vec![root.to_path_buf()],
        }
    }

    /// True iff the filtered walk from `root` reaches at least one entry
    /// with a non-empty file list.
    pub fn has_child_module(&self, root: &Path) -> Result<bool> {
        for entry in self.walk(root) {
            if !entry?.files.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether traversal may descend into `dir` under the symlink policy.
    /// Symlinked directories are listed but only entered with
    /// `follow_links`, so link cycles cannot recurse forever.
    pub fn can_descend(&self, dir: &Path) -> bool {
        self.settings.follow_links || !dir.is_symlink()
    }

    /// Hidden (`.`) directories are always pruned; private (`_`)
    /// directories are pruned unless private inclusion is on.
    fn is_hidden_dir(&self, name: &str) -> bool {
        name.starts_with('.') || (!self.settings.include_private && name.starts_with('_'))
    }

    /// A module file carries one of the recognized suffixes and a
    /// non-empty stem.
    fn has_module_suffix(&self, name: &str) -> bool {
        self.settings.module_suffixes.iter().any(|suffix| {
            name.strip_suffix(suffix.as_str())
                .and_then(|stem| stem.strip_suffix('.'))
                .is_some_and(|stem| !stem.is_empty())
        })
    }
}

/// Iterator over a filtered pre-order traversal.
pub struct WalkIter<'a> {
    walker: &'a FilteredWalker<'a>,
    /// Depth-first stack; children are pushed in reverse so the sorted
    /// order is preserved on pop.
    pending: Vec<PathBuf>,
}

impl Iterator for WalkIter<'_> {
    type Item = Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.pending.pop()?;
        match self.walker.read_entry(&dir) {
            Ok(entry) => {
                for sub in entry.subdirs.iter().rev() {
                    let child = dir.join(sub);
                    if self.walker.can_descend(&child) {
                        self.pending.push(child);
                    }
                }
                Some(Ok(entry))
            }
            Err(err) => {
                self.pending.clear();
                Some(Err(err))
            }
        }
    }
}
