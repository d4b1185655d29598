//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// docplan - documentation planner for source trees
#[derive(Parser, Debug, Clone)]
#[command(name = "docplan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan and generate documentation stub artifacts for a source tree")]
#[command(
    long_about = "docplan walks a directory tree of source modules, classifies every directory as a \
package, an implicit namespace package, or plain content, and produces an ordered plan of \
documentation artifacts: one stub per package, optionally one per submodule, plus a collapsed \
top-level index. The plan is rendered to reST stub files and written into the output directory."
)]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Plan the current directory into ./docs
    docplan

    # Plan a specific source tree
    docplan --path ./src/mypkg --output-dir ./docs/api

    # Exclude paths (patterns are globs resolved against the source root,
    # can be specified multiple times)
    docplan --exclude tests --exclude '*/vendored'

    # See what would be generated without touching disk
    docplan --dry-run

Planning Options:
    # Emit one artifact per submodule instead of inlining them
    docplan --separate

    # Include private (underscore-prefixed) modules and directories
    docplan --include-private

    # Treat directories without an init marker as namespace packages
    docplan --implicit-namespaces

Artifact Options:
    # Overwrite existing artifacts
    docplan --force

    # Remove artifacts left over from earlier runs
    docplan --remove-old

    # Change the artifact suffix and index name
    docplan --suffix md --tocfile index

Report Options:
    # Machine-readable run report
    docplan --output json --output-file plan-report.json

    # Quiet mode with minimal output
    docplan --quiet

Configuration:
    # Use a specific configuration file
    docplan --config ./docplan-config.toml

    # Create a default configuration file (.docplan.toml)
    docplan --init
")]
pub struct Args {
    /// Root of the source tree to plan
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Root directory of the source tree to plan (defaults to the current directory)"
    )]
    pub path: Option<PathBuf>,

    /// Directory generated artifacts are written into
    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory generated artifacts are written into (defaults to ./docs)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Exclude paths matching these glob patterns
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        help = "Glob patterns for paths to exclude, resolved against the source root; a pattern excludes the matching path and its whole subtree (can be specified multiple times)"
    )]
    pub exclude: Vec<String>,

    /// File suffixes recognized as documentable modules
    #[arg(
        long,
        value_name = "SUFFIX",
        help = "File suffixes (without the dot) recognized as documentable modules (can be specified multiple times, defaults to py and pyx)"
    )]
    pub module_suffix: Vec<String>,

    /// Suffix of generated artifact files
    #[arg(
        long,
        value_name = "SUFFIX",
        help = "Suffix (without the dot) of generated artifact files (defaults to rst)"
    )]
    pub suffix: Option<String>,

    /// Emit each submodule as its own artifact
    #[arg(
        long,
        help = "Emit one artifact per submodule instead of documenting submodules inline in their package artifact"
    )]
    pub separate: bool,

    /// Include private modules and directories
    #[arg(
        long,
        help = "Include modules and directories whose names start with an underscore"
    )]
    pub include_private: bool,

    /// Treat directories without an init marker as namespace packages
    #[arg(
        long,
        help = "Treat directories without an init marker as implicit namespace packages (a namespace is only documented when it contains at least one documentable module)"
    )]
    pub implicit_namespaces: bool,

    /// Follow symbolic links during traversal
    #[arg(
        long,
        help = "Follow symbolic links during directory traversal (may cause duplicate planning if links form cycles)"
    )]
    pub follow_links: bool,

    /// Overwrite artifacts that already exist
    #[arg(short, long, help = "Overwrite artifact files that already exist")]
    pub force: bool,

    /// Report planned writes without touching disk
    #[arg(
        short = 'n',
        long,
        help = "Report what would be generated without writing or removing anything"
    )]
    pub dry_run: bool,

    /// Suppress non-essential output
    #[arg(
        short,
        long,
        help = "Suppress non-essential output (only show the bare run summary)"
    )]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(
        short,
        long,
        help = "Show detailed progress and debug information (includes per-package submodule listings)"
    )]
    pub verbose: bool,

    /// Omit headings from rendered artifacts
    #[arg(long, help = "Omit headings from rendered artifact bodies")]
    pub no_headings: bool,

    /// Render package contents before submodule sections
    #[arg(
        long,
        help = "Render package contents before the subpackage and submodule sections"
    )]
    pub module_first: bool,

    /// Maximum depth recorded in rendered tables of contents
    #[arg(
        short = 'd',
        long,
        value_name = "DEPTH",
        help = "Maximum depth recorded in rendered tables of contents (default: 4)"
    )]
    pub max_depth: Option<usize>,

    /// Basename of the top-level index artifact
    #[arg(
        long,
        value_name = "NAME",
        help = "Basename of the top-level index artifact (default: modules)"
    )]
    pub tocfile: Option<String>,

    /// Skip writing the top-level index artifact
    #[arg(long, help = "Do not write the top-level index artifact")]
    pub no_toc: bool,

    /// Remove previously generated artifacts no longer planned
    #[arg(
        long,
        help = "Remove files in the output directory that carry the artifact suffix but are not part of the current plan"
    )]
    pub remove_old: bool,

    /// Heading of the top-level index artifact
    #[arg(
        long,
        value_name = "TEXT",
        help = "Heading of the top-level index artifact (defaults to the source directory name)"
    )]
    pub header: Option<String>,

    /// Directive options attached to rendered module bodies
    #[arg(
        long,
        value_name = "OPTION",
        help = "Directive option attached to rendered module bodies (can be specified multiple times, replaces the default set)"
    )]
    pub render_option: Vec<String>,

    /// Output format for the run report
    #[arg(
        long,
        value_enum,
        value_name = "FORMAT",
        help = "Output format for the run report: 'text' for human-readable output, 'json' for machine processing, 'csv' for spreadsheet analysis"
    )]
    pub output: Option<OutputFormat>,

    /// File the run report is written to
    #[arg(
        long,
        value_name = "FILE",
        help = "File to write the run report to (uses stdout if not specified)"
    )]
    pub output_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(
        long,
        help = "Disable colored output (useful for terminals without ANSI support or for piping output)"
    )]
    pub no_colors: bool,

    /// Disable the progress bar
    #[arg(
        long,
        help = "Disable the progress bar (useful for CI environments or when redirecting output)"
    )]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to a configuration file (defaults to .docplan.toml in the current directory if present)"
    )]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(
        long,
        help = "Create a default configuration file (.docplan.toml) in the current directory"
    )]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
