//! Progress reporting functionality
//!
//! Progress reporting for the artifact-writing phase, with support for
//! quiet and verbose modes.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for the write phase
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    verbose: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter. No bar is created in quiet mode or
    /// when progress display is disabled.
    pub fn new(quiet: bool, show_progress: bool, verbose: bool) -> Self {
        let bar = if quiet || !show_progress {
            None
        } else {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(bar)
        };

        Self { bar, verbose }
    }

    /// Start a new progress operation
    pub fn start(&self, total: usize, operation: &str) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.set_position(0);
            bar.set_message(operation.to_string());
        }
    }

    /// Record one completed step
    pub fn step(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            if self.verbose {
                bar.set_message(message.to_string());
            }
        }
    }

    /// Finish the current operation
    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }
}
