//! Encode query command implementation.

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;
use tracing::{info, instrument};

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON object to encode (reads --file, or stdin, when omitted)
    pub json: Option<String>,

    /// JSON file with the record (use - for stdin)
    #[arg(long, conflicts_with = "json")]
    pub file: Option<String>,
}

#[instrument(skip_all)]
pub fn run(args: EncodeArgs) -> Result<()> {
    let record = read_record(&args)?;
    if !record.is_object() {
        bail!("Record must be a JSON object");
    }

    let params = ponzu_core::encode(&record).context("Failed to encode record")?;
    info!(keys = params.len(), "Encoded record");

    println!("{}", params.encode());

    Ok(())
}

fn read_record(args: &EncodeArgs) -> Result<Value> {
    if let Some(ref json) = args.json {
        return serde_json::from_str(json).context("Invalid JSON argument");
    }

    match args.file.as_deref() {
        Some(path) if path != "-" => {
            let content = std::fs::read_to_string(path).context("Failed to read JSON file")?;
            serde_json::from_str(&content).context("Invalid JSON in file")
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            serde_json::from_str(&buf).context("Invalid JSON from stdin")
        }
    }
}
