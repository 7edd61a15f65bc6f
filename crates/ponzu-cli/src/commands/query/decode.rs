//! Decode query command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Map, Value};
use tracing::debug;

use ponzu_core::QueryParams;

use crate::output;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Query string (a leading '?' is ignored)
    pub query: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: DecodeArgs) -> Result<()> {
    let query = args.query.strip_prefix('?').unwrap_or(&args.query);
    let params = QueryParams::parse(query).context("Invalid query string")?;
    debug!(keys = params.len(), "Decoded query");

    let object: Map<String, Value> = params
        .keys()
        .map(|key| {
            let values = params
                .get_all(key)
                .iter()
                .map(|v| Value::String(v.clone()))
                .collect();
            (key.to_string(), Value::Array(values))
        })
        .collect();

    output::json(&object, args.pretty)
}
