//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for docplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory of the source tree to plan
    pub source_path: PathBuf,

    /// Directory generated artifacts are written into
    pub output_dir: PathBuf,

    /// Patterns for paths to exclude from planning
    pub exclude_patterns: Vec<String>,

    /// File suffixes recognized as documentable modules (without the dot)
    pub module_suffixes: Vec<String>,

    /// Stem of the package init-marker file
    pub init_marker: String,

    /// Suffix of generated artifact files (without the dot)
    pub artifact_suffix: String,

    /// Whether to emit each submodule as its own artifact
    pub separate_modules: bool,

    /// Whether to include modules and directories with a leading underscore
    pub include_private: bool,

    /// Whether directories without an init marker may count as packages
    pub implicit_namespaces: bool,

    /// Whether to follow symbolic links during traversal
    pub follow_links: bool,

    /// Whether to overwrite artifacts that already exist
    pub force: bool,

    /// Whether to report planned writes without touching disk
    pub dry_run: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to omit headings from rendered artifacts
    pub no_headings: bool,

    /// Whether package contents render before submodule sections
    pub module_first: bool,

    /// Maximum depth recorded in rendered tables of contents
    pub max_depth: usize,

    /// Basename of the top-level index artifact
    pub toc_filename: String,

    /// Whether to skip writing the top-level index artifact
    pub no_toc: bool,

    /// Whether to remove previously generated artifacts no longer planned
    pub remove_old: bool,

    /// Heading of the top-level index artifact (source directory name if unset)
    pub header: Option<String>,

    /// Directive options attached to rendered module bodies
    pub render_options: Vec<String>,

    /// Output format for the run report (text, json, csv)
    pub output_format: OutputFormat,

    /// File the run report is written to (stdout if not specified)
    pub output_file: Option<PathBuf>,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a progress bar during the write phase
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("."),
            output_dir: PathBuf::from("docs"),
            exclude_patterns: Vec::new(),
            module_suffixes: vec!["py".to_string(), "pyx".to_string()],
            init_marker: "__init__".to_string(),
            artifact_suffix: "rst".to_string(),
            separate_modules: false,
            include_private: false,
            implicit_namespaces: false,
            follow_links: false,
            force: false,
            dry_run: false,
            quiet: false,
            verbose: false,
            no_headings: false,
            module_first: false,
            max_depth: 4,
            toc_filename: "modules".to_string(),
            no_toc: false,
            remove_old: false,
            header: None,
            render_options: vec![
                "members".to_string(),
                "undoc-members".to_string(),
                "show-inheritance".to_string(),
            ],
            output_format: OutputFormat::Text,
            output_file: None,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported run-report formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub source_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub exclude_patterns: Option<Vec<String>>,
    pub module_suffixes: Option<Vec<String>>,
    pub init_marker: Option<String>,
    pub artifact_suffix: Option<String>,
    pub separate_modules: Option<bool>,
    pub include_private: Option<bool>,
    pub implicit_namespaces: Option<bool>,
    pub follow_links: Option<bool>,
    pub force: Option<bool>,
    pub dry_run: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub no_headings: Option<bool>,
    pub module_first: Option<bool>,
    pub max_depth: Option<usize>,
    pub toc_filename: Option<String>,
    pub no_toc: Option<bool>,
    pub remove_old: Option<bool>,
    pub header: Option<String>,
    pub render_options: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one.
    /// Fields from `other` take precedence over existing fields.
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.source_path.is_some() {
            self.source_path = other.source_path;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.module_suffixes.is_some() {
            self.module_suffixes = other.module_suffixes;
        }
        if other.init_marker.is_some() {
            self.init_marker = other.init_marker;
        }
        if other.artifact_suffix.is_some() {
            self.artifact_suffix = other.artifact_suffix;
        }
        if other.separate_modules.is_some() {
            self.separate_modules = other.separate_modules;
        }
        if other.include_private.is_some() {
            self.include_private = other.include_private;
        }
        if other.implicit_namespaces.is_some() {
            self.implicit_namespaces = other.implicit_namespaces;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.force.is_some() {
            self.force = other.force;
        }
        if other.dry_run.is_some() {
            self.dry_run = other.dry_run;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.no_headings.is_some() {
            self.no_headings = other.no_headings;
        }
        if other.module_first.is_some() {
            self.module_first = other.module_first;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.toc_filename.is_some() {
            self.toc_filename = other.toc_filename;
        }
        if other.no_toc.is_some() {
            self.no_toc = other.no_toc;
        }
        if other.remove_old.is_some() {
            self.remove_old = other.remove_old;
        }
        if other.header.is_some() {
            self.header = other.header;
        }
        if other.render_options.is_some() {
            self.render_options = other.render_options;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings.
    /// Uses defaults for any fields that are None.
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(source_path) = &self.source_path {
            settings.source_path = source_path.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(module_suffixes) = &self.module_suffixes {
            settings.module_suffixes = module_suffixes.clone();
        }
        if let Some(init_marker) = &self.init_marker {
            settings.init_marker = init_marker.clone();
        }
        if let Some(artifact_suffix) = &self.artifact_suffix {
            settings.artifact_suffix = artifact_suffix.clone();
        }
        if let Some(separate_modules) = self.separate_modules {
            settings.separate_modules = separate_modules;
        }
        if let Some(include_private) = self.include_private {
            settings.include_private = include_private;
        }
        if let Some(implicit_namespaces) = self.implicit_namespaces {
            settings.implicit_namespaces = implicit_namespaces;
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(force) = self.force {
            settings.force = force;
        }
        if let Some(dry_run) = self.dry_run {
            settings.dry_run = dry_run;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(no_headings) = self.no_headings {
            settings.no_headings = no_headings;
        }
        if let Some(module_first) = self.module_first {
            settings.module_first = module_first;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(toc_filename) = &self.toc_filename {
            settings.toc_filename = toc_filename.clone();
        }
        if let Some(no_toc) = self.no_toc {
            settings.no_toc = no_toc;
        }
        if let Some(remove_old) = self.remove_old {
            settings.remove_old = remove_old;
        }
        if let Some(header) = &self.header {
            settings.header = Some(header.clone());
        }
        if let Some(render_options) = &self.render_options {
            settings.render_options = render_options.clone();
        }
        if let Some(output_format) = &self.output_format {
            settings.output_format = output_format.clone();
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
