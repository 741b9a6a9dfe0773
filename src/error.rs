//! Error types for configuration translation.

use thiserror::Error;

/// Errors that can occur while translating a database configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `adapter` key is absent.
    #[error("Missing required key: adapter")]
    MissingAdapter,

    /// The generic builder was invoked without a scheme.
    #[error("Missing URI scheme")]
    MissingScheme,

    /// The sqlite3 builder was invoked without a `database` value.
    #[error("Missing required key: database")]
    MissingDatabase,

    /// A relative sqlite3 database path could not be resolved.
    #[error("Cannot resolve relative database path '{0}' without a root")]
    MissingRoot(String),

    /// The root a relative sqlite3 database path is joined onto is itself relative.
    #[error("Application root must be an absolute path, got '{0}'")]
    RelativeRoot(String),

    /// Environment variable not found.
    #[error("Environment variable not found: {0}")]
    EnvNotFound(String),

    /// Invalid environment variable value.
    #[error("Invalid environment variable '{name}': {message}")]
    InvalidEnvValue {
        /// Variable name.
        name: String,
        /// What went wrong.
        message: String,
    },

    /// The requested environment is not defined in the database file.
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    /// A configuration value is not a scalar.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue {
        /// Offending key.
        key: String,
        /// What went wrong.
        message: String,
    },

    /// Reading the database file failed.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The database file is not valid TOML.
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
