//! Error types and definitions for docplan

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for docplan operations
#[derive(Debug, Error)]
pub enum DocplanError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// TOML parsing errors without file context
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Exclusion pattern compilation errors
    #[error("Invalid exclusion pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Directory listing failures during the walk
    #[error("Traversal error at {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Planning errors with free-form context
    #[error("Planning error: {message}")]
    Planning { message: String },

    /// Artifact or report file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Failure removing a stale artifact
    #[error("Failed to remove stale artifact {path}: {source}")]
    StaleRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocplanError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - cleanup leftovers are reported, never fatal
            DocplanError::StaleRemove { .. } => ErrorSeverity::Warning,

            // Critical errors - a broken configuration or traversal cannot
            // produce a trustworthy plan, so the process terminates
            DocplanError::Config { .. } => ErrorSeverity::Critical,
            DocplanError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            DocplanError::ConfigRead { .. } => ErrorSeverity::Critical,
            DocplanError::ConfigParse { .. } => ErrorSeverity::Critical,
            DocplanError::TomlParse { .. } => ErrorSeverity::Critical,
            DocplanError::InvalidPath { .. } => ErrorSeverity::Critical,
            DocplanError::PermissionDenied { .. } => ErrorSeverity::Critical,
            DocplanError::Pattern { .. } => ErrorSeverity::Critical,
            DocplanError::Traversal { .. } => ErrorSeverity::Critical,
            DocplanError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            DocplanError::StdoutWrite { .. } => ErrorSeverity::Critical,
            DocplanError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DocplanError::PermissionDenied { path } => {
                format!(
                    "Cannot access '{}' due to permission denied. Check file permissions or run with elevated permissions.",
                    path.display()
                )
            }
            DocplanError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            DocplanError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file or use command line options.",
                    path.display()
                )
            }
            DocplanError::Pattern { pattern, source } => {
                format!(
                    "Invalid exclusion pattern '{}': {}. Patterns are shell globs resolved against the source root.",
                    pattern, source
                )
            }
            DocplanError::Traversal { path, source } => {
                format!(
                    "Could not list directory '{}': {}. The plan was aborted because a partial traversal cannot be trusted.",
                    path.display(),
                    source
                )
            }
            DocplanError::OutputDirectoryNotFound { path } => {
                format!(
                    "Output directory '{}' does not exist. Create the directory or specify a different output path.",
                    path.display()
                )
            }
            DocplanError::Io { source } => {
                format!(
                    "File system error: {}. Check disk space and permissions.",
                    source
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        DocplanError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        DocplanError::Config {
            message: message.into(),
        }
    }

    /// Create a planning error
    pub fn planning_error(message: impl Into<String>) -> Self {
        DocplanError::Planning {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        DocplanError::PermissionDenied { path: path.into() }
    }

    /// Create a traversal error for a directory listing failure
    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocplanError::Traversal {
            path: path.into(),
            source,
        }
    }

    /// Create a pattern compilation error
    pub fn pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        DocplanError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocplanError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for DocplanError {
    fn from(err: std::io::Error) -> Self {
        DocplanError::io_error(err)
    }
}

impl From<toml::de::Error> for DocplanError {
    fn from(err: toml::de::Error) -> Self {
        DocplanError::TomlParse { source: err }
    }
}

impl From<serde_json::Error> for DocplanError {
    fn from(err: serde_json::Error) -> Self {
        DocplanError::JsonSerialize { source: err }
    }
}

impl From<csv::Error> for DocplanError {
    fn from(err: csv::Error) -> Self {
        DocplanError::Csv { source: err }
    }
}

/// Result type alias for docplan operations
pub type Result<T> = std::result::Result<T, DocplanError>;
