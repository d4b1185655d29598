//! Run report structures
//!
//! Everything the formatters need to describe one planning/generation run.

use crate::models::plan::{DocUnit, ModulePath};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a single run, as handed to the report formatters.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    /// Source tree the plan was built from
    pub source_path: PathBuf,
    /// Directory artifacts were written into
    pub output_dir: PathBuf,
    /// Planned units in emission order
    pub units: Vec<DocUnit>,
    /// Top-level names before index collapsing
    pub toplevels: Vec<ModulePath>,
    /// Collapsed index entries
    pub index: Vec<ModulePath>,
    /// Artifact paths written (or, under dry-run, that would be written)
    pub written: Vec<PathBuf>,
    /// Stale artifacts removed (or that would be removed)
    pub removed: Vec<PathBuf>,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl PlanReport {
    pub fn package_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u, DocUnit::Package(_)))
            .count()
    }

    pub fn module_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u, DocUnit::Module(_)))
            .count()
    }
}
