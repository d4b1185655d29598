//! Planning data structures
//!
//! The planner produces a flat, ordered sequence of documentation units.
//! Qualified names are kept as explicit segment lists and only joined into
//! dotted strings at the rendering and reporting boundary, so ancestry
//! checks never suffer dotted-string prefix ambiguity.

use serde::{Serialize, Serializer};
use std::fmt;

/// A qualified module name: an ordered sequence of name segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    /// Create a single-segment path.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Create a path from pre-split segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse a dotted name; empty segments are dropped.
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Return a new path with `name` appended. A dotted `name` contributes
    /// one segment per dot-separated part.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            name.split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Strict descendant check: `other` must be a proper segment prefix.
    /// `foo.bar` descends from `foo`, but `foobar` does not.
    pub fn is_descendant_of(&self, other: &ModulePath) -> bool {
        self.segments.len() > other.segments.len()
            && self.segments[..other.segments.len()] == other.segments[..]
    }

    /// Dot-joined string form, for rendering and reporting.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

impl Serialize for ModulePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.dotted())
    }
}

/// A planned artifact for a single module.
///
/// `basename` may itself be dotted when the module was flattened out of a
/// package; the qualified name is always `package` + `basename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleUnit {
    pub package: Option<ModulePath>,
    pub basename: String,
}

impl ModuleUnit {
    pub fn qualified_name(&self) -> ModulePath {
        match &self.package {
            Some(package) => package.join(&self.basename),
            None => ModulePath::parse(&self.basename),
        }
    }
}

/// A planned artifact for a package directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageUnit {
    pub name: ModulePath,
    /// Qualified names of child packages that are not skipped; sorted, unique.
    pub subpackages: Vec<ModulePath>,
    /// Qualified names of the package's own module files; sorted, unique.
    pub submodules: Vec<ModulePath>,
    pub is_namespace: bool,
}

/// The top-level index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexUnit {
    pub names: Vec<ModulePath>,
}

/// One planned documentation artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocUnit {
    Module(ModuleUnit),
    Package(PackageUnit),
    Index(IndexUnit),
}

impl DocUnit {
    /// The qualified name the artifact is filed under, if the unit has one.
    pub fn qualified_name(&self) -> Option<ModulePath> {
        match self {
            DocUnit::Module(m) => Some(m.qualified_name()),
            DocUnit::Package(p) => Some(p.name.clone()),
            DocUnit::Index(_) => None,
        }
    }
}

/// The ordered output of a planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Units in emission order: pre-order over the tree, packages before
    /// the modules flattened out of them.
    pub units: Vec<DocUnit>,
    /// Top-level qualified names in emission order, not yet collapsed.
    pub toplevels: Vec<ModulePath>,
}
