//! Configuration settings validation

use crate::error::{DocplanError, Result};
use crate::models::config::Settings;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // The source root must be an existing directory
        if !settings.source_path.exists() {
            return Err(DocplanError::InvalidPath {
                path: settings.source_path.clone(),
            });
        }
        if !settings.source_path.is_dir() {
            return Err(DocplanError::config_error(format!(
                "Source path '{}' is not a directory",
                settings.source_path.display()
            )));
        }

        // Exclude patterns must compile
        for pattern in &settings.exclude_patterns {
            if pattern.is_empty() {
                return Err(DocplanError::config_error(
                    "Exclude patterns must not be empty",
                ));
            }
            glob::Pattern::new(pattern).map_err(|e| DocplanError::pattern(pattern, e))?;
        }

        if settings.max_depth == 0 {
            return Err(DocplanError::config_error(
                "Max depth must be at least 1",
            ));
        }

        if settings.module_suffixes.is_empty()
            || settings.module_suffixes.iter().any(|s| s.is_empty())
        {
            return Err(DocplanError::config_error(
                "module_suffixes must be a non-empty list of non-empty suffixes",
            ));
        }

        if settings.artifact_suffix.is_empty() {
            return Err(DocplanError::config_error(
                "artifact_suffix must not be empty",
            ));
        }

        if settings.toc_filename.is_empty() {
            return Err(DocplanError::config_error(
                "toc_filename must not be empty",
            ));
        }

        // The report file's parent directory must exist
        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that a report output path is writable
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(DocplanError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}
