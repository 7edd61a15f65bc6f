//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::query::QueryCommand;
use crate::commands::reference::ReferenceCommand;

/// Ponzu content API helper tool.
#[derive(Parser, Debug)]
#[command(name = "ponzu")]
#[command(author, version = env!("PONZU_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Content reference URI operations
    Reference(ReferenceCommand),

    /// Query parameter encoding
    Query(QueryCommand),
}
