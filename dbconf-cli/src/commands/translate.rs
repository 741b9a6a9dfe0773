//! `dbconf translate` command - Print the connection URI for an environment.

use dbconf::Translator;
use tracing::debug;

use super::{load_database_file, resolve_paths};
use crate::cli::TranslateArgs;
use crate::error::CliResult;

/// Run the translate command
pub async fn run(args: TranslateArgs) -> CliResult<()> {
    let (root, path) = resolve_paths(args.file, args.root)?;
    let environment = args.env.unwrap_or_else(dbconf::current_environment);
    debug!(path = %path.display(), environment = %environment, "Translating database file");

    let file = load_database_file(&path).await?;
    let translator = Translator::new()
        .with_application_root(root)
        .use_jdbc_prefix(args.jdbc);

    let result = file.translate(&environment, &translator)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.uri());
    }

    Ok(())
}
