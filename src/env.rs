//! `${VAR}` interpolation for configuration values.

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{ConfigError, ConfigResult};
use crate::value::{ConfigValue, RawConfig};

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of variables, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Fallback behavior of a `${VAR:<op>word}` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Fallback {
    /// `${VAR}`: fail if unset, empty values pass through.
    None,
    /// `${VAR:-word}`: use `word` if unset or empty.
    Default(String),
    /// `${VAR:?word}`: fail with `word` if unset or empty.
    Require(String),
    /// `${VAR:+word}`: `word` if set, empty otherwise.
    Alternate(String),
}

/// Expands `$VAR`, `${VAR}`, `${VAR:-default}`, `${VAR:?message}` and
/// `${VAR:+value}` references. `$$` is a literal `$`, and a `$` not followed
/// by a name is kept as-is.
///
/// ```rust
/// use dbconf::env::{EnvExpander, MapEnv};
///
/// let expander = EnvExpander::with_source(MapEnv::new().set("DB_HOST", "db.internal"));
/// assert_eq!(expander.expand("${DB_HOST}").unwrap(), "db.internal");
/// assert_eq!(expander.expand("${DB_PORT:-5432}").unwrap(), "5432");
/// assert_eq!(expander.expand("pa$$word").unwrap(), "pa$word");
/// ```
#[derive(Debug, Clone)]
pub struct EnvExpander<S: EnvSource = ProcessEnv> {
    source: S,
}

impl EnvExpander<ProcessEnv> {
    /// Create an expander over the process environment.
    pub fn new() -> Self {
        Self { source: ProcessEnv }
    }
}

impl Default for EnvExpander<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> EnvExpander<S> {
    /// Create an expander with a custom environment source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every reference in `input`.
    pub fn expand(&self, input: &str) -> ConfigResult<String> {
        if !input.contains('$') {
            return Ok(input.to_string());
        }

        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }

            match chars.peek() {
                Some('$') => {
                    chars.next();
                    out.push('$');
                }
                Some('{') => {
                    chars.next();
                    let (name, fallback) = read_braced(&mut chars)?;
                    out.push_str(&self.resolve(&name, fallback)?);
                }
                Some(&n) if n.is_alphabetic() || n == '_' => {
                    let name = read_name(&mut chars);
                    out.push_str(&self.resolve(&name, Fallback::None)?);
                }
                _ => out.push('$'),
            }
        }

        Ok(out)
    }

    /// Expand every string value of a configuration.
    pub fn expand_config(&self, config: &RawConfig) -> ConfigResult<RawConfig> {
        config
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    ConfigValue::String(s) => ConfigValue::String(self.expand(s)?),
                    other => other.clone(),
                };
                Ok::<_, ConfigError>((key.to_string(), value))
            })
            .collect()
    }

    fn resolve(&self, name: &str, fallback: Fallback) -> ConfigResult<String> {
        let value = self.source.get(name);
        if fallback == Fallback::None {
            return value.ok_or_else(|| ConfigError::EnvNotFound(name.to_string()));
        }

        // modifiers treat set-but-empty like unset
        match (value.filter(|v| !v.is_empty()), fallback) {
            (Some(_), Fallback::Alternate(word)) => Ok(word),
            (Some(v), _) => Ok(v),
            (None, Fallback::Default(word)) => Ok(word),
            (None, Fallback::Alternate(_)) => Ok(String::new()),
            (None, Fallback::Require(message)) => Err(ConfigError::InvalidEnvValue {
                name: name.to_string(),
                message: if message.is_empty() {
                    format!("Required variable '{}' is not set", name)
                } else {
                    message
                },
            }),
            (None, Fallback::None) => Err(ConfigError::EnvNotFound(name.to_string())),
        }
    }
}

fn read_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if !(c.is_alphanumeric() || c == '_') {
            break;
        }
        name.push(c);
        chars.next();
    }
    name
}

fn read_braced(chars: &mut Peekable<Chars<'_>>) -> ConfigResult<(String, Fallback)> {
    let name = read_name(chars);
    if name.is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            name: String::new(),
            message: "Empty variable name".to_string(),
        });
    }

    let unterminated = || ConfigError::InvalidEnvValue {
        name: name.clone(),
        message: "Unterminated variable reference".to_string(),
    };

    match chars.next() {
        Some('}') => return Ok((name, Fallback::None)),
        Some(':') => {}
        _ => return Err(unterminated()),
    }

    let op = chars.next().ok_or_else(unterminated)?;
    let mut word = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some(c) => word.push(c),
            None => return Err(unterminated()),
        }
    }

    let fallback = match op {
        '-' => Fallback::Default(word),
        '?' => Fallback::Require(word),
        '+' => Fallback::Alternate(word),
        other => {
            return Err(ConfigError::InvalidEnvValue {
                name,
                message: format!("Unsupported modifier ':{}'", other),
            });
        }
    };

    Ok((name, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander() -> EnvExpander<MapEnv> {
        EnvExpander::with_source(
            MapEnv::new()
                .set("HOST", "localhost")
                .set("PORT", "5432")
                .set("USER", "app")
                .set("EMPTY", ""),
        )
    }

    #[test]
    fn test_expand_simple_and_braced() {
        let e = expander();
        assert_eq!(e.expand("$HOST").unwrap(), "localhost");
        assert_eq!(e.expand("${HOST}:${PORT}").unwrap(), "localhost:5432");
    }

    #[test]
    fn test_expand_default() {
        let e = expander();
        assert_eq!(e.expand("${HOST:-db}").unwrap(), "localhost");
        assert_eq!(e.expand("${MISSING:-db}").unwrap(), "db");
        assert_eq!(e.expand("${EMPTY:-db}").unwrap(), "db");
    }

    #[test]
    fn test_expand_required() {
        let e = expander();
        let err = e.expand("${MISSING:?set MISSING first}").unwrap_err();
        assert!(err.to_string().contains("set MISSING first"));

        let err = e.expand("${MISSING:?}").unwrap_err();
        assert!(err.to_string().contains("is not set"));
    }

    #[test]
    fn test_expand_alternate() {
        let e = expander();
        assert_eq!(e.expand("${USER:+yes}").unwrap(), "yes");
        assert_eq!(e.expand("${MISSING:+yes}").unwrap(), "");
    }

    #[test]
    fn test_expand_missing() {
        let err = expander().expand("${MISSING}").unwrap_err();
        assert!(matches!(err, ConfigError::EnvNotFound(ref n) if n == "MISSING"));
    }

    #[test]
    fn test_literal_dollar() {
        assert_eq!(expander().expand("costs $5 or $").unwrap(), "costs $5 or $");
    }

    #[test]
    fn test_double_dollar_escapes() {
        let e = expander();
        assert_eq!(e.expand("pa$$word").unwrap(), "pa$word");
        assert_eq!(e.expand("$${HOST}").unwrap(), "${HOST}");
        assert_eq!(e.expand("$$$HOST").unwrap(), "$localhost");
    }

    #[test]
    fn test_set_but_empty_variable() {
        let e = expander();
        assert_eq!(e.expand("$EMPTY").unwrap(), "");
        assert_eq!(e.expand("x${EMPTY}y").unwrap(), "xy");
        assert!(e.expand("${EMPTY:?}").is_err());
    }

    #[test]
    fn test_malformed_reference() {
        assert!(expander().expand("${HOST").is_err());
        assert!(expander().expand("${}").is_err());
        assert!(expander().expand("${HOST:=x}").is_err());
    }

    #[test]
    fn test_expand_config_only_touches_strings() {
        let config = RawConfig::new()
            .set("host", "${HOST}")
            .set("pool", 5)
            .set("username", "$USER");

        let expanded = expander().expand_config(&config).unwrap();
        assert_eq!(expanded.get_str("host"), Some("localhost"));
        assert_eq!(expanded.get("pool"), Some(&ConfigValue::Int(5)));
        assert_eq!(expanded.get_str("username"), Some("app"));
    }
}
