//! Configuration file and environment variable sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::Result;
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".docplan.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(crate::error::DocplanError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.exists() && self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Variables are read exactly once, when this source is loaded during
/// startup configuration resolution.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 25,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn list_var(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|value| {
            value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("SOURCE_PATH") {
            settings.source_path = Some(PathBuf::from(path));
        }

        if let Some(dir) = self.var("OUTPUT_DIR") {
            settings.output_dir = Some(PathBuf::from(dir));
        }

        if let Some(exclude) = self.list_var("EXCLUDE") {
            settings.exclude_patterns = Some(exclude);
        }

        if let Some(suffixes) = self.list_var("MODULE_SUFFIXES") {
            settings.module_suffixes = Some(suffixes);
        }

        if let Some(options) = self.list_var("RENDER_OPTIONS") {
            settings.render_options = Some(options);
        }

        if let Some(suffix) = self.var("ARTIFACT_SUFFIX") {
            settings.artifact_suffix = Some(suffix);
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            let output_format = format.parse().map_err(|_| {
                crate::error::DocplanError::InvalidOutputFormat {
                    format: format.clone(),
                }
            })?;
            settings.output_format = Some(output_format);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        self.var("SOURCE_PATH").is_some()
            || self.var("OUTPUT_DIR").is_some()
            || self.var("EXCLUDE").is_some()
            || self.var("MODULE_SUFFIXES").is_some()
            || self.var("RENDER_OPTIONS").is_some()
            || self.var("ARTIFACT_SUFFIX").is_some()
            || self.var("OUTPUT_FORMAT").is_some()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
