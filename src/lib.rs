//! docplan - documentation planning for source trees
//!
//! This library walks a directory tree of source-code modules, classifies
//! every directory as a regular package, an implicit namespace package, or
//! plain content, and produces an ordered plan of documentation artifacts:
//! one stub per package, optionally one per flattened submodule, plus a
//! collapsed top-level index. Rendering and persistence live behind narrow
//! collaborators so the planning core stays a pure function of the tree and
//! the resolved settings.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::core::{build_index, Classifier, ExcludeMatcher, FilteredWalker, PackageKind, Planner, WalkEntry};
pub use error::{DocplanError, ErrorSeverity, OptionExt, Result, ResultExt};
pub use models::{
    config::{OutputFormat, Settings},
    plan::{DocUnit, IndexUnit, ModulePath, ModuleUnit, PackageUnit, Plan},
    report::PlanReport,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
