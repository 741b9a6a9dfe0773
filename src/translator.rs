//! Translation of a flat database configuration into a connection descriptor.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::builders::{UriOptions, builder_for};
use crate::error::{ConfigError, ConfigResult};
use crate::value::RawConfig;

/// Keys consumed as core connection parameters rather than passed through as options.
pub const BASE_OPTIONS: &[&str] = &["root", "adapter", "database", "password", "username", "hostname"];

/// Adapter that never receives the `jdbc:` prefix.
const NO_JDBC_ADAPTER: &str = "postgresql";

/// The normalized connection descriptor.
///
/// Serializes as a plain string, or as `{"uri": ..., "options": {...}}` when
/// the configuration carried keys outside [`BASE_OPTIONS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranslationResult {
    /// A bare connection URI.
    Uri(String),
    /// A connection URI with pass-through options.
    WithOptions {
        /// Connection URI.
        uri: String,
        /// Keys outside the base option set, verbatim.
        options: RawConfig,
    },
}

impl TranslationResult {
    /// Wrap a URI, attaching options only when there are any.
    pub fn new(uri: String, options: RawConfig) -> Self {
        if options.is_empty() {
            Self::Uri(uri)
        } else {
            Self::WithOptions { uri, options }
        }
    }

    /// The connection URI.
    pub fn uri(&self) -> &str {
        match self {
            Self::Uri(uri) | Self::WithOptions { uri, .. } => uri,
        }
    }

    /// The pass-through options, if any.
    pub fn options(&self) -> Option<&RawConfig> {
        match self {
            Self::Uri(_) => None,
            Self::WithOptions { options, .. } => Some(options),
        }
    }

    /// Split into the URI and its (possibly empty) options.
    pub fn into_parts(self) -> (String, RawConfig) {
        match self {
            Self::Uri(uri) => (uri, RawConfig::new()),
            Self::WithOptions { uri, options } => (uri, options),
        }
    }
}

impl fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

/// Translates flat database configurations into connection descriptors.
///
/// # Examples
///
/// ```rust
/// use dbconf::{RawConfig, Translator};
///
/// let translator = Translator::new().with_application_root("/path/to/app");
///
/// let config = RawConfig::new()
///     .set("adapter", "sqlite3")
///     .set("database", "db/development.sqlite3");
/// let result = translator.translate(&config).unwrap();
/// assert_eq!(result.uri(), "sqlite:///path/to/app/db/development.sqlite3");
///
/// let config = RawConfig::new()
///     .set("adapter", "postgresql")
///     .set("database", "app")
///     .set("pool", 5);
/// let result = translator.translate(&config).unwrap();
/// assert_eq!(result.uri(), "postgres:///app");
/// assert_eq!(result.options().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    application_root: Option<PathBuf>,
    use_jdbc_prefix: bool,
}

impl Translator {
    /// Create a translator with no application root and no JDBC prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application root, overriding any `root` key in translated configs.
    pub fn with_application_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.application_root = Some(root.into());
        self
    }

    /// Enable/disable the `jdbc:` prefix for non-PostgreSQL adapters.
    pub fn use_jdbc_prefix(mut self, enabled: bool) -> Self {
        self.use_jdbc_prefix = enabled;
        self
    }

    /// Translate a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAdapter`] if `adapter` is absent, or
    /// whatever the selected builder reports.
    pub fn translate(&self, config: &RawConfig) -> ConfigResult<TranslationResult> {
        let adapter = config
            .get("adapter")
            .map(ToString::to_string)
            .ok_or(ConfigError::MissingAdapter)?;

        let config = match self.application_root {
            Some(ref root) => config.clone().set("root", root.to_string_lossy().into_owned()),
            None => config.clone(),
        };

        let other_options = config.without(BASE_OPTIONS);
        let uri_options = UriOptions::from_config(&config.without(&["adapter"]), &adapter);

        debug!(
            adapter = %adapter,
            options = other_options.len(),
            "Translating database configuration"
        );

        let uri = builder_for(&adapter)(uri_options)?;
        let uri = if self.use_jdbc_prefix && adapter != NO_JDBC_ADAPTER {
            format!("jdbc:{}", uri)
        } else {
            uri
        };

        Ok(TranslationResult::new(uri, other_options))
    }
}

/// Translate a configuration with a default [`Translator`].
pub fn translate(config: &RawConfig) -> ConfigResult<TranslationResult> {
    Translator::new().translate(config)
}
