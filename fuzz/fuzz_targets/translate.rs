//! Structured fuzz target for the translator.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_translate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dbconf::{RawConfig, Translator};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzConfig {
    adapter: Option<String>,
    database: Option<String>,
    username: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    root: Option<String>,
    extras: Vec<(String, String)>,
    jdbc: bool,
}

fuzz_target!(|input: FuzzConfig| {
    let mut config = RawConfig::new();
    let fields = [
        ("adapter", input.adapter),
        ("database", input.database),
        ("username", input.username),
        ("password", input.password),
        ("host", input.host),
        ("root", input.root),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            config.insert(key, value);
        }
    }
    if let Some(port) = input.port {
        config.insert("port", port);
    }
    for (key, value) in input.extras {
        config.insert(key, value);
    }

    let translator = Translator::new().use_jdbc_prefix(input.jdbc);
    if let Ok(result) = translator.translate(&config) {
        assert!(!result.uri().is_empty());
    }
});
