//! Build reference command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use ponzu_core::Target;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Content type name (e.g., Post)
    #[arg(long = "type", short = 't')]
    pub content_type: String,

    /// Content item ID
    #[arg(long, allow_hyphen_values = true)]
    pub id: i64,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let target = Target::new(&args.content_type, args.id).context("Invalid target")?;
    let uri = target.reference_uri();

    debug!(%uri, "Built reference");
    println!("{}", uri);

    Ok(())
}
