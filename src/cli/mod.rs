//! CLI module for the transfer market API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server
//! - `migrate`: apply pending database migrations

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Transfer Market API - fantasy team manager backend
#[derive(Parser)]
#[command(name = "transfer-market-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Apply pending database migrations
    Migrate,
}
