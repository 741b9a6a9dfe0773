//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// dbconf - translate database configurations into connection URIs
#[derive(Parser, Debug)]
#[command(name = "dbconf")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "dbconf - translate database configurations into connection URIs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate an environment of the database file into a connection URI
    Translate(TranslateArgs),

    /// List the environments defined in the database file
    Environments(EnvironmentsArgs),

    /// List adapters with specialized URI rules
    Adapters,

    /// Display version information
    Version,
}

/// Arguments for the `translate` command
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Path to the database file (defaults to <root>/config/database.toml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Environment to translate (defaults to $DBCONF_ENV, then "development")
    #[arg(short, long)]
    pub env: Option<String>,

    /// Application root used to resolve SQLite paths (defaults to current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Prefix non-PostgreSQL URIs with `jdbc:`
    #[arg(long, env = "DBCONF_JDBC")]
    pub jdbc: bool,

    /// Print the full result, including options, as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `environments` command
#[derive(Args, Debug)]
pub struct EnvironmentsArgs {
    /// Path to the database file (defaults to <root>/config/database.toml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Application root (defaults to current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,
}
