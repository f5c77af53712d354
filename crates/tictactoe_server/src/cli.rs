//! Command-line interface for tictactoe_server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against the computer, over HTTP
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Single-game tic-tac-toe HTTP API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to (overrides PORT and the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides HOST and the config file)
        #[arg(long)]
        host: Option<String>,

        /// Optional TOML file with `host` and `port`
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
