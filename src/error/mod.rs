//! Error handling for the docplan application
//!
//! A single structured error type with severity classification: skip
//! decisions during planning are never errors, configuration and traversal
//! failures are fatal, and cleanup leftovers are warnings.

pub mod context;
pub mod types;


pub use context::{OptionExt, ResultExt};
pub use types::{DocplanError, ErrorSeverity, Result};
