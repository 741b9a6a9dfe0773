//! `dbconf environments` command - List environments in the database file.

use super::{load_database_file, resolve_paths};
use crate::cli::EnvironmentsArgs;
use crate::error::CliResult;
use crate::output::{self, list_item};

/// Run the environments command
pub async fn run(args: EnvironmentsArgs) -> CliResult<()> {
    let (_, path) = resolve_paths(args.file, args.root)?;
    let file = load_database_file(&path).await?;

    output::header("Environments");
    output::kv("File", &path.display().to_string());
    output::newline();

    let names: Vec<_> = file.environments().collect();
    if names.is_empty() {
        output::warn("No environments defined");
        return Ok(());
    }

    for name in names {
        list_item(name);
    }

    Ok(())
}
