//! Output formatting functionality
//!
//! Pure formatting helpers turning a run report into text, JSON, or CSV.

use crate::error::{DocplanError, Result};
use crate::models::plan::DocUnit;
use crate::models::report::PlanReport;
use ansi_term::Colour::{Blue, Cyan, Green, Purple, Yellow};
use ansi_term::Style;

/// Format a run report as human-readable text
pub fn format_report_text(report: &PlanReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let title = if report.dry_run {
        "=== Documentation Plan (dry run) ==="
    } else {
        "=== Documentation Plan ==="
    };
    if use_colors {
        output.push_str(&format!("{}\n", Style::new().bold().paint(title)));
    } else {
        output.push_str(&format!("{}\n", title));
    }

    output.push_str(&format!("Source: {}\n", report.source_path.display()));
    output.push_str(&format!("Output: {}\n\n", report.output_dir.display()));

    for unit in &report.units {
        output.push_str(&format_unit_text(unit, use_colors, verbose));
    }

    if !report.index.is_empty() {
        let names: Vec<String> = report.index.iter().map(|n| n.dotted()).collect();
        if use_colors {
            output.push_str(&format!(
                "\n{} {}\n",
                Purple.paint("index"),
                names.join(", ")
            ));
        } else {
            output.push_str(&format!("\nindex {}\n", names.join(", ")));
        }
    }

    output.push_str(&format!(
        "\nSummary: {} packages, {} modules, {} index entries\n",
        report.package_count(),
        report.module_count(),
        report.index.len()
    ));
    output.push_str(&format!(
        "Artifacts written: {}, stale removed: {}\n",
        report.written.len(),
        report.removed.len()
    ));
    output.push_str(&format!(
        "Completed in {} at {}\n",
        format_duration(report.duration),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    output
}

/// Format a single planned unit as one (or, in verbose mode, several) lines
pub fn format_unit_text(unit: &DocUnit, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    match unit {
        DocUnit::Package(p) => {
            let label = if p.is_namespace {
                "namespace"
            } else {
                "package"
            };
            if use_colors {
                output.push_str(&format!(
                    "{:<10} {}\n",
                    Cyan.paint(label),
                    Blue.bold().paint(p.name.dotted())
                ));
            } else {
                output.push_str(&format!("{:<10} {}\n", label, p.name));
            }
            if verbose {
                for sub in &p.subpackages {
                    output.push_str(&format!("           subpackage {}\n", sub));
                }
                for sub in &p.submodules {
                    output.push_str(&format!("           submodule  {}\n", sub));
                }
            }
        }
        DocUnit::Module(m) => {
            if use_colors {
                output.push_str(&format!(
                    "{:<10} {}\n",
                    Green.paint("module"),
                    m.qualified_name()
                ));
            } else {
                output.push_str(&format!("{:<10} {}\n", "module", m.qualified_name()));
            }
        }
        DocUnit::Index(i) => {
            if use_colors {
                output.push_str(&format!(
                    "{:<10} {} entries\n",
                    Yellow.paint("index"),
                    i.names.len()
                ));
            } else {
                output.push_str(&format!("{:<10} {} entries\n", "index", i.names.len()));
            }
        }
    }

    output
}

/// Format a run report as pretty-printed JSON
pub fn format_report_json(report: &PlanReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(DocplanError::from)
}

/// Format a run report as CSV, one row per planned unit
pub fn format_report_csv(report: &PlanReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "kind",
        "name",
        "is_namespace",
        "subpackages",
        "submodules",
    ])?;

    for unit in &report.units {
        match unit {
            DocUnit::Package(p) => {
                let name = p.name.dotted();
                let is_namespace = p.is_namespace.to_string();
                let subpackages = p
                    .subpackages
                    .iter()
                    .map(|n| n.dotted())
                    .collect::<Vec<_>>()
                    .join(";");
                let submodules = p
                    .submodules
                    .iter()
                    .map(|n| n.dotted())
                    .collect::<Vec<_>>()
                    .join(";");
                writer.write_record([
                    "package",
                    name.as_str(),
                    is_namespace.as_str(),
                    subpackages.as_str(),
                    submodules.as_str(),
                ])?;
            }
            DocUnit::Module(m) => {
                let name = m.qualified_name().dotted();
                writer.write_record(["module", name.as_str(), "", "", ""])?;
            }
            DocUnit::Index(i) => {
                let names = i
                    .names
                    .iter()
                    .map(|n| n.dotted())
                    .collect::<Vec<_>>()
                    .join(";");
                writer.write_record(["index", "", "", "", names.as_str()])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DocplanError::planning_error(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| DocplanError::CsvSerialize { source: e })
}

/// Format a duration in a human-readable way
pub fn format_duration(duration: std::time::Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs == 0 {
        return format!("{}ms", millis);
    }

    let mins = total_secs / 60;
    let secs = total_secs % 60;

    if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, millis)
    }
}
