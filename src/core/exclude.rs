//! Exclusion pattern matching
//!
//! Patterns are shell globs resolved against the scan root. Each compiled
//! rule is anchored: a pattern covering path P matches P itself and
//! everything nested under it, but never an unrelated sibling that merely
//! shares P as a string prefix (excluding `foo` must not exclude `foobar`).

use crate::error::{DocplanError, Result};
use glob::Pattern;
use std::path::Path;

/// A single compiled exclusion rule.
#[derive(Debug, Clone)]
struct ExcludePattern {
    /// Matches the covered path itself.
    exact: Pattern,
    /// Matches anything nested under the covered path.
    subtree: Pattern,
}

impl ExcludePattern {
    fn compile(pattern: &str, root: &Path) -> Result<Self> {
        let raw = pattern.trim_end_matches('/');
        let anchored = if Path::new(raw).is_absolute() {
            raw.to_string()
        } else {
            // The root itself is a literal path, not a glob.
            format!("{}/{}", Pattern::escape(&root.to_string_lossy()), raw)
        };

        let exact = Pattern::new(&anchored)
            .map_err(|e| DocplanError::pattern(pattern, e))?;
        let subtree = Pattern::new(&format!("{}/**", anchored))
            .map_err(|e| DocplanError::pattern(pattern, e))?;

        Ok(Self { exact, subtree })
    }

    fn matches(&self, path: &str) -> bool {
        self.exact.matches(path) || self.subtree.matches(path)
    }
}

/// A compiled set of exclusion rules, immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    patterns: Vec<ExcludePattern>,
}

impl ExcludeMatcher {
    /// Compile a set of pattern strings against a scan root.
    ///
    /// A malformed pattern is a fatal configuration error.
    pub fn compile(patterns: &[String], root: &Path) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| ExcludePattern::compile(p, root))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Check whether a path is excluded by any compiled pattern.
    ///
    /// Pure function of the path and the compiled set; no I/O.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&text))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
