//! Core planning functionality: exclusion matching, filtered traversal,
//! package classification, documentation planning, and index collapsing

pub mod classify;
pub mod exclude;
pub mod index;
pub mod planner;
pub mod walker;

pub use classify::{Classifier, PackageKind};
pub use exclude::ExcludeMatcher;
pub use index::build_index;
pub use planner::Planner;
pub use walker::{FilteredWalker, WalkEntry};
