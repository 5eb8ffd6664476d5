//! Kalu CLI
//!
//! - `translate` / `tables` / `check-tables` work offline on the schema tables
//! - `login`, `get`, `post`, `put`, `delete`, `health`, `stats`, `tasks` call
//!   the dashboard API through the translating client
//!
//! JSON goes to stdout; logs go to stderr.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    tracing::info!("Kalu CLI {} starting", env!("CARGO_PKG_VERSION"));
    commands::run(cli).await
}
