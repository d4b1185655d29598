//! Artifact rendering
//!
//! Turns planned documentation units into reST stub bodies. Rendering is a
//! pure function of the unit and the run's settings; the planner never
//! inspects what is produced here.

use crate::models::config::Settings;
use crate::models::plan::{DocUnit, IndexUnit, ModulePath, ModuleUnit, PackageUnit};

/// Renderer for documentation units.
pub struct Renderer<'a> {
    settings: &'a Settings,
}

impl<'a> Renderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Render the artifact body for one unit.
    pub fn render(&self, unit: &DocUnit) -> String {
        match unit {
            DocUnit::Module(m) => self.render_module(m),
            DocUnit::Package(p) => self.render_package(p),
            DocUnit::Index(i) => self.render_index(i),
        }
    }

    fn render_module(&self, unit: &ModuleUnit) -> String {
        let mut out = String::new();
        if !self.settings.no_headings {
            out.push_str(&heading(&format!("{} module", unit.basename), '='));
        }
        out.push_str(&self.automodule(&unit.qualified_name()));
        out
    }

    fn render_package(&self, unit: &PackageUnit) -> String {
        let mut out = String::new();

        if !self.settings.no_headings {
            let label = if unit.is_namespace {
                "namespace"
            } else {
                "package"
            };
            out.push_str(&heading(&format!("{} {}", unit.name, label), '='));
        }

        if self.settings.module_first && !unit.is_namespace {
            out.push_str(&self.automodule(&unit.name));
            out.push('\n');
        }

        if !unit.subpackages.is_empty() {
            if !self.settings.no_headings {
                out.push_str(&heading("Subpackages", '-'));
            }
            out.push_str(&self.toctree(&unit.subpackages));
            out.push('\n');
        }

        if !unit.submodules.is_empty() {
            if !self.settings.no_headings {
                out.push_str(&heading("Submodules", '-'));
            }
            if self.settings.separate_modules {
                // flattened modules get their own artifacts; link them
                out.push_str(&self.toctree(&unit.submodules));
                out.push('\n');
            } else {
                for submodule in &unit.submodules {
                    if !self.settings.no_headings {
                        out.push_str(&heading(&format!("{} module", submodule), '~'));
                    }
                    out.push_str(&self.automodule(submodule));
                    out.push('\n');
                }
            }
        }

        if !self.settings.module_first && !unit.is_namespace {
            if !self.settings.no_headings {
                out.push_str(&heading("Module contents", '-'));
            }
            out.push_str(&self.automodule(&unit.name));
        }

        out
    }

    fn render_index(&self, unit: &IndexUnit) -> String {
        let header = match &self.settings.header {
            Some(header) => header.clone(),
            None => self
                .settings
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Modules".to_string()),
        };

        let mut out = heading(&header, '=');
        out.push_str(&self.toctree(&unit.names));
        out
    }

    fn automodule(&self, name: &ModulePath) -> String {
        let mut options = self.settings.render_options.clone();
        if self.settings.include_private
            && !options.iter().any(|o| o == "private-members")
        {
            options.push("private-members".to_string());
        }
        options.sort();

        let mut out = format!(".. automodule:: {}\n", name);
        for option in options {
            out.push_str(&format!("   :{}:\n", option));
        }
        out
    }

    fn toctree(&self, entries: &[ModulePath]) -> String {
        let mut out = format!(
            ".. toctree::\n   :maxdepth: {}\n\n",
            self.settings.max_depth
        );
        for entry in entries {
            out.push_str(&format!("   {}\n", entry));
        }
        out
    }
}

fn heading(text: &str, underline: char) -> String {
    format!(
        "{}\n{}\n\n",
        text,
        underline.to_string().repeat(text.chars().count())
    )
}
