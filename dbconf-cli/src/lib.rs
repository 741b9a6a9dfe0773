//! dbconf CLI - Command-line interface for dbconf.
//!
//! This crate provides the `dbconf` binary, which reads an environment-keyed
//! database file and prints the connection URI for one environment.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
