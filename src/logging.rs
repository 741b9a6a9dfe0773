//! Logging setup.
//!
//! Logging is off unless requested through the environment:
//!
//! - `DBCONF_DEBUG=true|1|yes` - enable debug logging
//! - `DBCONF_LOG_LEVEL=trace|debug|info|warn|error` - set the level explicitly
//! - `DBCONF_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! Inside the crate, use the `tracing` macros with structured fields. Never
//! log passwords or assembled URIs.
//!
//! ```rust,no_run
//! dbconf::logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Whether `DBCONF_DEBUG` enables debug logging.
pub fn is_debug_enabled() -> bool {
    env::var("DBCONF_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// The log level from `DBCONF_LOG_LEVEL`.
///
/// Defaults to "debug" if `DBCONF_DEBUG` is enabled, otherwise "warn".
pub fn log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };

    match env::var("DBCONF_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// The output format from `DBCONF_LOG_FORMAT`.
pub fn log_format() -> &'static str {
    env::var("DBCONF_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging. Subsequent calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("DBCONF_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        install(log_level());
    });
}

#[cfg(feature = "tracing-subscriber")]
fn install(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_new(format!("dbconf={},dbconf_cli={}", level, level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    match log_format() {
        "json" => registry.with(fmt::layer().json().with_writer(std::io::stderr)).init(),
        "compact" => registry.with(fmt::layer().compact().with_writer(std::io::stderr)).init(),
        _ => registry.with(fmt::layer().pretty().with_writer(std::io::stderr)).init(),
    }

    tracing::info!(level = level, format = log_format(), "dbconf logging initialized");
}
