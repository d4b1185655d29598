//! Configuration management
//!
//! Settings are merged from defaults, a TOML config file, `DOCPLAN_*`
//! environment variables, and command-line arguments, in rising priority.
//! The merged result is resolved exactly once at startup and threaded
//! through the run; nothing reads configuration again mid-run.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;


use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig};
pub use parser::{
    create_default_config, find_default_config, parse_config_content, parse_config_file,
};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for reporting
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            let partial = source.load()?;
            Ok(self.merge(partial))
        } else {
            Ok(self)
        }
    }

    /// Try to load from a source, ignoring it if not available or broken
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if source.is_available() {
            match source.load() {
                Ok(partial) => self.merge(partial),
                Err(_) => self,
            }
        } else {
            self
        }
    }

    /// Add configuration from a file
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path.to_path_buf());
        self.load_from(&file_config)
    }

    /// Try to add configuration from the default config file
    pub fn try_add_default_config_file(self) -> Self {
        if let Ok(Some(default_config)) = parser::find_default_config() {
            self.merge(default_config)
        } else {
            self
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        settings::SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from all sources with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    // CLI arguments are the highest-priority source
    let cli_config = CliConfig::new(cli_args.clone());

    let mut builder = ConfigBuilder::new();

    // Config file: an explicit path must exist, default locations may not
    if let Some(config_path) = cli_args.config {
        let file_config = FileConfig::with_path(config_path);
        builder = builder.load_from(&file_config)?;
    } else {
        builder = builder.try_add_default_config_file();
    }

    // Environment variables sit between the file and the command line
    let env_config = EnvConfig::new("DOCPLAN");
    builder = builder.try_load_from(&env_config);

    builder = builder.load_from(&cli_config)?;

    builder.build()
}
