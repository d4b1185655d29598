//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub module_suffixes: Option<Vec<String>>,
    pub artifact_suffix: Option<String>,
    pub separate_modules: bool,
    pub include_private: bool,
    pub implicit_namespaces: bool,
    pub follow_links: bool,
    pub force: bool,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_headings: bool,
    pub module_first: bool,
    pub max_depth: Option<usize>,
    pub toc_filename: Option<String>,
    pub no_toc: bool,
    pub remove_old: bool,
    pub header: Option<String>,
    pub render_options: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Build the flat argument structure from parsed clap arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            output_dir: args.output_dir.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            module_suffixes: if args.module_suffix.is_empty() {
                None
            } else {
                Some(args.module_suffix.clone())
            },
            artifact_suffix: args.suffix.clone(),
            separate_modules: args.separate,
            include_private: args.include_private,
            implicit_namespaces: args.implicit_namespaces,
            follow_links: args.follow_links,
            force: args.force,
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
            no_headings: args.no_headings,
            module_first: args.module_first,
            max_depth: args.max_depth,
            toc_filename: args.tocfile.clone(),
            no_toc: args.no_toc,
            remove_old: args.remove_old,
            header: args.header.clone(),
            render_options: if args.render_option.is_empty() {
                None
            } else {
                Some(args.render_option.clone())
            },
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = &self.args.path {
            settings.source_path = Some(path.clone());
        }

        if let Some(output_dir) = &self.args.output_dir {
            settings.output_dir = Some(output_dir.clone());
        }

        if let Some(exclude) = &self.args.exclude {
            settings.exclude_patterns = Some(exclude.clone());
        }

        if let Some(suffixes) = &self.args.module_suffixes {
            settings.module_suffixes = Some(suffixes.clone());
        }

        if let Some(suffix) = &self.args.artifact_suffix {
            settings.artifact_suffix = Some(suffix.clone());
        }

        if let Some(max_depth) = self.args.max_depth {
            settings.max_depth = Some(max_depth);
        }

        if let Some(toc_filename) = &self.args.toc_filename {
            settings.toc_filename = Some(toc_filename.clone());
        }

        if let Some(header) = &self.args.header {
            settings.header = Some(header.clone());
        }

        if let Some(render_options) = &self.args.render_options {
            settings.render_options = Some(render_options.clone());
        }

        if let Some(format) = &self.args.output_format {
            settings.output_format = Some(format.clone());
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        // Boolean flags only override when actually set
        if self.args.separate_modules {
            settings.separate_modules = Some(true);
        }

        if self.args.include_private {
            settings.include_private = Some(true);
        }

        if self.args.implicit_namespaces {
            settings.implicit_namespaces = Some(true);
        }

        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.force {
            settings.force = Some(true);
        }

        if self.args.dry_run {
            settings.dry_run = Some(true);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_headings {
            settings.no_headings = Some(true);
        }

        if self.args.module_first {
            settings.module_first = Some(true);
        }

        if self.args.no_toc {
            settings.no_toc = Some(true);
        }

        if self.args.remove_old {
            settings.remove_old = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
