//! `dbconf adapters` command - List adapters with specialized URI rules.

use crate::error::CliResult;
use crate::output::{self, list_item};

/// Run the adapters command
pub async fn run() -> CliResult<()> {
    output::header("Adapters");

    for name in dbconf::registered_adapters() {
        list_item(name);
    }

    output::newline();
    output::dim("Other adapters use the generic rules with the adapter name as scheme.");

    Ok(())
}
