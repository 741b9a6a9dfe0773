//! Scalar configuration values and the flat configuration map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConfigError, ConfigResult};

/// A scalar value from a database configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
}

impl ConfigValue {
    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a TOML value, rejecting arrays and tables.
    pub fn from_toml(key: &str, value: toml::Value) -> ConfigResult<Self> {
        match value {
            toml::Value::String(s) => Ok(Self::String(s)),
            toml::Value::Integer(i) => Ok(Self::Int(i)),
            toml::Value::Float(f) => Ok(Self::Float(f)),
            toml::Value::Boolean(b) => Ok(Self::Bool(b)),
            toml::Value::Datetime(dt) => Ok(Self::String(dt.to_string())),
            toml::Value::Array(_) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "arrays are not supported".to_string(),
            }),
            toml::Value::Table(_) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "nested tables are not supported".to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u16> for ConfigValue {
    fn from(v: u16) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// A flat database configuration: keys to scalar values, in insertion order.
///
/// ```rust
/// use dbconf::RawConfig;
///
/// let config = RawConfig::new()
///     .set("adapter", "postgresql")
///     .set("database", "app_dev")
///     .set("pool", 5);
///
/// assert_eq!(config.get_str("adapter"), Some("postgresql"));
/// assert_eq!(config.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig {
    entries: IndexMap<String, ConfigValue>,
}

impl RawConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert a key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get a value.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Get a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the configuration has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// A copy of this configuration without the given keys.
    pub fn without(&self, keys: &[&str]) -> Self {
        self.iter()
            .filter(|(k, _)| !keys.contains(k))
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// A copy of this configuration with `other`'s keys layered on top.
    pub fn merged_with(&self, other: &RawConfig) -> Self {
        let mut merged = self.clone();
        for (k, v) in other.iter() {
            merged.insert(k, v.clone());
        }
        merged
    }
}

impl FromIterator<(String, ConfigValue)> for RawConfig {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RawConfig {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
