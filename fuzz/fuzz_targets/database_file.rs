//! Fuzz target for the database file parser.
//!
//! Feeds arbitrary TOML to the parser and translates every environment
//! that parses, looking for panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_database_file
//! ```

#![no_main]

use dbconf::env::{EnvExpander, MapEnv};
use dbconf::{DatabaseFile, Translator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(file) = DatabaseFile::parse(input) else {
        return;
    };

    let expander = EnvExpander::with_source(MapEnv::new().set("HOST", "localhost"));
    let translator = Translator::new().with_application_root("/app");

    let names: Vec<String> = file.environments().map(String::from).collect();
    for name in names {
        if let Ok(config) = file.environment_with(&name, &expander) {
            let _ = translator.translate(&config);
        }
    }
});
