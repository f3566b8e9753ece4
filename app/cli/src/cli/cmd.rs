use clap::{Parser, Subcommand};

use crate::cli::insert::args::Args;
use crate::cli::query::args::{BalanceQuery, Query};

#[derive(Parser, Debug)]
#[command(name = "transfers")]
#[command(about = "CLI tool for the crypto_transfer table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record one crypto transfer row
    Insert(Args),
    /// Select crypto transfers by entity or consensus timestamp range
    Select(Query),
    /// Net amount per entity over a consensus timestamp range
    Balances(BalanceQuery),
}
