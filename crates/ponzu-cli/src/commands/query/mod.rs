//! Query parameter subcommands.

mod decode;
mod encode;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct QueryCommand {
    #[command(subcommand)]
    pub command: QuerySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum QuerySubcommand {
    /// Encode a JSON record as a query string
    Encode(encode::EncodeArgs),

    /// Decode a query string into JSON
    Decode(decode::DecodeArgs),
}

pub fn handle(cmd: QueryCommand) -> Result<()> {
    match cmd.command {
        QuerySubcommand::Encode(args) => encode::run(args),
        QuerySubcommand::Decode(args) => decode::run(args),
    }
}
