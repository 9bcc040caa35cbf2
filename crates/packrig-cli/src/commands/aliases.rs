//! Aliases command implementation.

use packrig_config::dedupe_aliases;

use crate::cli::AliasesArgs;
use crate::error::Result;

/// Print the dedupe alias map as JSON.
pub fn execute(args: AliasesArgs) -> Result<()> {
    let aliases = dedupe_aliases(args.modules.as_slice(), &args.folder)?;
    println!("{}", serde_json::to_string_pretty(&aliases)?);
    Ok(())
}
