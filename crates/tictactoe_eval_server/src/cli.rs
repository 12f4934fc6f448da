//! Command-line interface for tictactoe_eval_server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe move evaluator - HTTP endpoint, MCP tool and one-shot CLI
#[derive(Parser, Debug)]
#[command(name = "tictactoe_eval_server")]
#[command(about = "Validate and score tic-tac-toe move sequences", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Http {
        /// Port to bind to (overrides config file and EVAL_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config file and EVAL_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the MCP server (stdio mode)
    Mcp,

    /// Evaluate one move sequence and print the result as JSON
    Eval {
        /// Concatenated tile codes, e.g. A1B2C3
        #[arg(default_value = "")]
        moves: String,
    },
}
