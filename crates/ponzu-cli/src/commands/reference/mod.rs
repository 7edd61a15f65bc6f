//! Reference URI subcommands.

mod build;
mod parse;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ReferenceCommand {
    #[command(subcommand)]
    pub command: ReferenceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReferenceSubcommand {
    /// Parse reference URIs into lookup targets
    Parse(parse::ParseArgs),

    /// Build the reference URI for a target
    Build(build::BuildArgs),
}

pub fn handle(cmd: ReferenceCommand) -> Result<()> {
    match cmd.command {
        ReferenceSubcommand::Parse(args) => parse::run(args),
        ReferenceSubcommand::Build(args) => build::run(args),
    }
}
