//! dbconf CLI - Command-line interface for dbconf.

use clap::Parser;

use dbconf_cli::cli::{Cli, Command};
use dbconf_cli::commands;
use dbconf_cli::error::CliResult;
use dbconf_cli::output;

#[tokio::main]
async fn main() {
    dbconf::logging::init();

    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Translate(args) => commands::translate::run(args).await,
        Command::Environments(args) => commands::environments::run(args).await,
        Command::Adapters => commands::adapters::run().await,
        Command::Version => commands::version::run().await,
    }
}
