//! Output writing functionality
//!
//! Writers for the run report (stdout or a file) and the artifact writer
//! holding the persistence policy: dry-run reporting, skip-existing,
//! forced overwrite with unchanged-content detection, and stale cleanup.

use crate::error::{DocplanError, Result};
use crate::models::config::Settings;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Trait for run-report writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        print!("{}", content);
        io::stdout()
            .flush()
            .map_err(|e| DocplanError::StdoutWrite { source: e })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut file =
            File::create(&self.path).map_err(|e| DocplanError::output_write(&self.path, e))?;

        file.write_all(content.as_bytes())
            .map_err(|e| DocplanError::output_write(&self.path, e))
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}

/// Writes rendered artifacts into the output directory.
pub struct ArtifactWriter<'a> {
    settings: &'a Settings,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// The on-disk location for a qualified artifact name.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.settings
            .output_dir
            .join(format!("{}.{}", name, self.settings.artifact_suffix))
    }

    /// Make sure the output directory exists. A no-op under dry-run.
    pub fn ensure_output_dir(&self) -> Result<()> {
        if self.settings.dry_run {
            return Ok(());
        }
        fs::create_dir_all(&self.settings.output_dir)
            .map_err(|e| DocplanError::output_write(&self.settings.output_dir, e))
    }

    /// Write one artifact, honoring the persistence policy.
    ///
    /// Returns the path actually used (or, under dry-run, that would have
    /// been used).
    pub fn write(&self, name: &str, text: &str) -> Result<PathBuf> {
        let path = self.artifact_path(name);
        let settings = self.settings;

        if settings.dry_run {
            if !settings.quiet {
                println!("Would create file {}.", path.display());
            }
            return Ok(path);
        }

        if !settings.force && path.is_file() {
            if !settings.quiet {
                println!("File {} already exists, skipping.", path.display());
            }
            return Ok(path);
        }

        // avoid rewriting identical content so timestamps stay stable
        if let Ok(existing) = fs::read_to_string(&path) {
            if existing == text {
                if settings.verbose && !settings.quiet {
                    println!("File {} unchanged, not rewriting.", path.display());
                }
                return Ok(path);
            }
        }

        if !settings.quiet {
            println!("Creating file {}.", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DocplanError::output_write(&path, e))?;
        }
        fs::write(&path, text).map_err(|e| DocplanError::output_write(&path, e))?;

        Ok(path)
    }

    /// Remove previously generated artifacts that are not part of this
    /// run's written set. Individual removal failures are reported as
    /// warnings; the sweep itself never fails the run.
    pub fn remove_stale(&self, written: &[PathBuf]) -> Vec<PathBuf> {
        let keep: HashSet<&Path> = written.iter().map(PathBuf::as_path).collect();
        let settings = self.settings;
        let mut removed = Vec::new();

        for entry in WalkDir::new(&settings.output_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str())
                != Some(settings.artifact_suffix.as_str())
            {
                continue;
            }
            if keep.contains(path) {
                continue;
            }

            if settings.dry_run {
                if !settings.quiet {
                    println!("Would remove stale file {}.", path.display());
                }
                removed.push(path.to_path_buf());
                continue;
            }

            match fs::remove_file(path) {
                Ok(()) => {
                    if !settings.quiet {
                        println!("Removed stale file {}.", path.display());
                    }
                    removed.push(path.to_path_buf());
                }
                Err(e) => {
                    let warning = DocplanError::StaleRemove {
                        path: path.to_path_buf(),
                        source: e,
                    };
                    eprintln!("Warning: {}", warning);
                }
            }
        }

        removed
    }
}
