//! Output rendering, formatting, and writing functionality

pub mod formatters;
mod progress;
pub mod render;
mod writers;


pub use self::progress::ProgressReporter;
pub use self::render::Renderer;
pub use self::writers::{
    create_writer, ArtifactWriter, FileWriter, OutputWriter, StdoutWriter,
};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::PlanReport;

/// Trait for different report formatters
pub trait Formatter {
    /// Format a run report into a string
    fn format(&self, report: &PlanReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &PlanReport) -> Result<String> {
        // In quiet mode, only output the bare counts
        if self.quiet {
            return Ok(format!(
                "Packages: {}, modules: {}, written: {}\n",
                report.package_count(),
                report.module_count(),
                report.written.len()
            ));
        }

        Ok(formatters::format_report_text(
            report,
            self.use_colors,
            self.verbose,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &PlanReport) -> Result<String> {
        formatters::format_report_json(report)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &PlanReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: &OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
