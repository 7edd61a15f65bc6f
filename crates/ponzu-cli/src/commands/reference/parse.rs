//! Parse reference command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, instrument};

use ponzu_core::Target;

use crate::output;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Reference URIs (e.g., /api/content?type=Post&id=1)
    #[arg(required = true)]
    pub uris: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print labeled fields instead of JSON
    #[arg(long, conflicts_with = "pretty")]
    pub fields: bool,
}

#[instrument(skip_all, fields(count = args.uris.len()))]
pub fn run(args: ParseArgs) -> Result<()> {
    for uri in &args.uris {
        let target =
            Target::parse(uri).with_context(|| format!("Invalid reference URI '{uri}'"))?;

        debug!(
            uri = %uri,
            content_type = target.content_type(),
            id = target.id(),
            "Parsed reference"
        );

        if args.fields {
            output::field("Type", target.content_type());
            output::field("ID", &target.id().to_string());
        } else {
            output::json(&target, args.pretty)?;
        }
    }

    Ok(())
}
