//! Subcommand implementations.

pub mod query;
pub mod reference;
