//! Package and module classification
//!
//! Decides how a directory participates in the documentation plan and
//! whether individual entries are worth documenting at all. Skip decisions
//! made here are normal outcomes, never errors.

use crate::core::exclude::ExcludeMatcher;
use crate::error::{DocplanError, Result};
use crate::models::config::Settings;
use std::fs;
use std::path::Path;

/// How a visited directory participates in the documentation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Contains an init-marker file.
    Regular,
    /// No init marker, admitted under the implicit-namespace policy.
    Namespace,
    /// Package-shaped, but with no showable content inside.
    Skipped,
    /// Neither a package nor a namespace; only meaningful at the scan root.
    Plain,
}

/// Classifier over a compiled exclusion set and the run's settings.
pub struct Classifier<'a> {
    matcher: &'a ExcludeMatcher,
    settings: &'a Settings,
}

impl<'a> Classifier<'a> {
    pub fn new(matcher: &'a ExcludeMatcher, settings: &'a Settings) -> Self {
        Self { matcher, settings }
    }

    /// Check whether `filename` is an init-marker file under any of the
    /// recognized module suffixes.
    pub fn is_init_marker(&self, filename: &str) -> bool {
        self.settings
            .module_suffixes
            .iter()
            .any(|suffix| filename == format!("{}.{}", self.settings.init_marker, suffix))
    }

    /// Check whether a file listing contains an init marker.
    pub fn is_package(&self, files: &[String]) -> bool {
        files.iter().any(|f| self.is_init_marker(f))
    }

    /// Check whether the directory on disk is a regular package.
    pub fn is_package_dir(&self, dir: &Path) -> Result<bool> {
        Ok(self.is_package(&self.list_module_files(dir)?))
    }

    /// Classify a directory from its filtered file listing.
    pub fn classify(&self, dir: &Path, files: &[String]) -> PackageKind {
        let regular = self.is_package(files);
        if !regular && !self.settings.implicit_namespaces {
            return PackageKind::Plain;
        }
        if self.is_skipped_package(dir) {
            PackageKind::Skipped
        } else if regular {
            PackageKind::Regular
        } else {
            PackageKind::Namespace
        }
    }

    /// Check whether a package directory has nothing showable inside.
    ///
    /// A directory that is not a regular package while namespace mode is
    /// off is always skipped; otherwise it is skipped only when every
    /// module file it directly contains, other than the init marker
    /// itself, is individually excluded. Non-directories are out of scope
    /// for this check and never skipped by it.
    pub fn is_skipped_package(&self, dir: &Path) -> bool {
        if !dir.is_dir() {
            return false;
        }

        // A fresh on-disk listing: the decision is about what the package
        // actually holds, not about what the walk kept.
        let files = match self.list_module_files(dir) {
            Ok(files) => files,
            Err(_) => return false,
        };

        let regular = self.is_package(&files);
        if !regular && !self.settings.implicit_namespaces {
            return true;
        }

        files
            .iter()
            .filter(|f| !self.is_init_marker(f))
            .all(|f| self.matcher.is_excluded(&dir.join(f)))
    }

    /// Check whether a module file should be left out of the plan: it
    /// vanished mid-walk, or it has a private name and private inclusion
    /// is off.
    pub fn is_skipped_module(&self, file: &Path) -> bool {
        if !file.exists() {
            return true;
        }
        if self.settings.include_private {
            return false;
        }
        file.file_name()
            .map(|n| n.to_string_lossy().starts_with('_'))
            .unwrap_or(false)
    }

    /// Move init-marker files to the front of a file ordering, canonical
    /// suffix first, so package init content documents before submodules.
    pub fn promote_init_marker(&self, files: &mut Vec<String>) {
        let mut markers = Vec::new();
        for suffix in &self.settings.module_suffixes {
            let marker = format!("{}.{}", self.settings.init_marker, suffix);
            if let Some(pos) = files.iter().position(|f| *f == marker) {
                markers.push(files.remove(pos));
            }
        }
        for marker in markers.into_iter().rev() {
            files.insert(0, marker);
        }
    }

    /// The module name of a file: everything up to the first dot.
    pub fn module_basename<'f>(&self, filename: &'f str) -> &'f str {
        filename.split('.').next().unwrap_or(filename)
    }

    fn list_module_files(&self, dir: &Path) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let entries = fs::read_dir(dir).map_err(|e| DocplanError::traversal(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| DocplanError::traversal(dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.path().is_file() && self.has_module_suffix(&name) {
                files.push(name);
            }
        }
        files.sort();
        Ok(files)
    }

    fn has_module_suffix(&self, name: &str) -> bool {
        self.settings.module_suffixes.iter().any(|suffix| {
            name.strip_suffix(suffix.as_str())
                .and_then(|stem| stem.strip_suffix('.'))
                .is_some_and(|stem| !stem.is_empty())
        })
    }
}
