//! Data models and structures for docplan

pub mod config;
pub mod plan;
pub mod report;

pub use config::{OutputFormat, Settings};
pub use plan::{DocUnit, IndexUnit, ModulePath, ModuleUnit, PackageUnit, Plan};
pub use report::PlanReport;
