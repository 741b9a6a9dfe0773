//! Environment-keyed database configuration files.
//!
//! A database file is a TOML document whose top-level tables are
//! environments. An optional `[default]` table is merged underneath every
//! environment:
//!
//! ```toml
//! [default]
//! adapter = "postgresql"
//! pool = 5
//!
//! [development]
//! database = "app_development"
//!
//! [production]
//! host = "${DATABASE_HOST}"
//! database = "app"
//! username = "app"
//! password = "${DATABASE_PASSWORD}"
//! ```

use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info};

use crate::env::{EnvExpander, EnvSource};
use crate::error::{ConfigError, ConfigResult};
use crate::translator::{TranslationResult, Translator};
use crate::value::{ConfigValue, RawConfig};

/// Default file name, relative to the application root.
pub const DEFAULT_FILE: &str = "config/database.toml";

/// Name of the table merged underneath every environment.
pub const DEFAULT_SECTION: &str = "default";

/// Environment variable selecting the active environment.
pub const ENV_VAR: &str = "DBCONF_ENV";

/// Environment used when [`ENV_VAR`] is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// The active environment name from [`ENV_VAR`], or [`DEFAULT_ENVIRONMENT`].
pub fn current_environment() -> String {
    std::env::var(ENV_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// A parsed database configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseFile {
    defaults: RawConfig,
    environments: IndexMap<String, RawConfig>,
}

impl DatabaseFile {
    /// Load a database file from disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let file = Self::parse(&content)?;
        info!(
            path = %path.display(),
            environments = file.environments.len(),
            "Database file loaded"
        );
        Ok(file)
    }

    /// Parse a database file from TOML.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let tables: IndexMap<String, toml::Value> = toml::from_str(content)?;

        let mut defaults = RawConfig::new();
        let mut environments = IndexMap::new();

        for (name, value) in tables {
            let toml::Value::Table(table) = value else {
                return Err(ConfigError::InvalidValue {
                    key: name,
                    message: "expected an environment table".to_string(),
                });
            };

            let config = table
                .into_iter()
                .map(|(key, value)| {
                    let value = ConfigValue::from_toml(&format!("{}.{}", name, key), value)?;
                    Ok::<_, ConfigError>((key, value))
                })
                .collect::<ConfigResult<RawConfig>>()?;

            if name == DEFAULT_SECTION {
                defaults = config;
            } else {
                environments.insert(name, config);
            }
        }

        Ok(Self {
            defaults,
            environments,
        })
    }

    /// Names of the environments defined in the file.
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    /// Check if an environment is defined.
    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    /// Resolve an environment against the process environment.
    pub fn environment(&self, name: &str) -> ConfigResult<RawConfig> {
        self.environment_with(name, &EnvExpander::new())
    }

    /// Resolve an environment: merge it over the defaults and expand variables.
    pub fn environment_with<S: EnvSource>(
        &self,
        name: &str,
        expander: &EnvExpander<S>,
    ) -> ConfigResult<RawConfig> {
        let overrides = self
            .environments
            .get(name)
            .ok_or_else(|| ConfigError::UnknownEnvironment(name.to_string()))?;

        debug!(environment = %name, keys = overrides.len(), "Resolving environment");
        expander.expand_config(&self.defaults.merged_with(overrides))
    }

    /// Resolve an environment and translate it.
    pub fn translate(&self, name: &str, translator: &Translator) -> ConfigResult<TranslationResult> {
        translator.translate(&self.environment(name)?)
    }
}
