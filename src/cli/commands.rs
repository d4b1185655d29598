//! Command implementations

use std::path::PathBuf;
use std::time::Instant;

use super::args::Args;
use crate::config::{self, CliArgs};
use crate::core::{build_index, Planner};
use crate::error::Result;
use crate::models::plan::{DocUnit, IndexUnit};
use crate::models::report::PlanReport;
use crate::output::{
    create_formatter, create_writer, ArtifactWriter, ProgressReporter, Renderer,
};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Plan and generate documentation artifacts
    Plan(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Plan(args)
    }

    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Command::Init => run_init(),
            Command::Plan(args) => run_plan(args),
        }
    }
}

fn run_init() -> Result<()> {
    let config_path = PathBuf::from(config::file::DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(&config_path)?;

    println!(
        "Created default configuration file at: {}",
        config_path.display()
    );
    println!("\nEvery key in the file is optional and commented out; uncomment");
    println!("what you want to change. Command-line options and DOCPLAN_*");
    println!("environment variables always take precedence over the file.");

    Ok(())
}

fn run_plan(args: Args) -> Result<()> {
    let start_time = Instant::now();

    // Resolve the full option set once; nothing re-reads configuration
    // after this point.
    let settings = config::load_config(CliArgs::from_args(&args))?;

    if !settings.quiet {
        println!(
            "{} v{} - documentation planner",
            crate::NAME,
            crate::VERSION
        );
        println!("Source path: {}", settings.source_path.display());
        println!("Output directory: {}", settings.output_dir.display());

        if settings.exclude_patterns.is_empty() {
            println!("No exclusion patterns");
        } else {
            println!("Excluding: {}", settings.exclude_patterns.join(", "));
        }

        if settings.verbose {
            println!("\nDetailed settings:");
            println!(
                "  Separate modules: {}",
                if settings.separate_modules { "enabled" } else { "disabled" }
            );
            println!(
                "  Implicit namespaces: {}",
                if settings.implicit_namespaces { "enabled" } else { "disabled" }
            );
            println!(
                "  Include private: {}",
                if settings.include_private { "enabled" } else { "disabled" }
            );
            println!(
                "  Follow links: {}",
                if settings.follow_links { "enabled" } else { "disabled" }
            );
            println!(
                "  Module suffixes: {}",
                settings.module_suffixes.join(", ")
            );
            println!("  Artifact suffix: {}", settings.artifact_suffix);
            if settings.dry_run {
                println!("  Dry run: enabled");
            }
        }
        println!();
    }

    // Plan
    let planner = Planner::new(&settings)?;
    let plan = planner.plan()?;
    let index = build_index(&plan.toplevels);

    let mut units = plan.units.clone();
    if !settings.no_toc {
        units.push(DocUnit::Index(IndexUnit {
            names: index.clone(),
        }));
    }

    // Render and persist
    let renderer = Renderer::new(&settings);
    let writer = ArtifactWriter::new(&settings);
    writer.ensure_output_dir()?;

    let progress =
        ProgressReporter::new(settings.quiet, settings.show_progress, settings.verbose);
    progress.start(units.len(), "Writing artifacts");

    let mut written = Vec::with_capacity(units.len());
    for unit in &units {
        let name = match unit {
            DocUnit::Package(p) => p.name.dotted(),
            DocUnit::Module(m) => m.qualified_name().dotted(),
            DocUnit::Index(_) => settings.toc_filename.clone(),
        };
        let text = renderer.render(unit);
        let path = writer.write(&name, &text)?;
        progress.step(&name);
        written.push(path);
    }
    progress.finish(&format!("{} artifacts", written.len()));

    let removed = if settings.remove_old {
        writer.remove_stale(&written)
    } else {
        Vec::new()
    };

    // Report
    let report = PlanReport {
        source_path: planner.root().to_path_buf(),
        output_dir: settings.output_dir.clone(),
        units,
        toplevels: plan.toplevels,
        index,
        written,
        removed,
        dry_run: settings.dry_run,
        duration: start_time.elapsed(),
    };

    let formatter = create_formatter(
        &settings.output_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
    );
    let output = formatter.format(&report)?;

    let report_writer = create_writer(settings.output_file.as_ref());
    report_writer.write(&output)?;

    if !settings.quiet {
        if let Some(path) = &settings.output_file {
            println!("Report written to: {}", path.display());
        }
    }

    Ok(())
}
