mod cli {
    pub mod insert {
        pub mod args;
        pub mod run;
    }
    pub mod query {
        pub mod args;
        pub mod response;
        pub mod run;
    }
    pub mod cmd;
}

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match &cli.command {
        Command::Insert(args) => {
            tracing::info!("Insert Command: {:?}", args);
            cli::insert::run::insert(args).await
        }
        Command::Select(query) => {
            tracing::info!("Select Query: {:?}", query);
            cli::query::run::select(query).await
        }
        Command::Balances(query) => {
            tracing::info!("Balances Query: {:?}", query);
            cli::query::run::balances(query).await
        }
    }
}

// stdout carries the JSON output, so logs go to stderr
fn init_tracing() {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
