//! Tic-tac-toe move evaluator - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rmcp::ServiceExt;
use std::path::PathBuf;
use tictactoe_eval::evaluate;
use tictactoe_eval_server::{EvaluatorServer, ServerConfig, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Http { port, host, config } => run_http_server(host, port, config).await,
        Command::Mcp => run_mcp_server().await,
        Command::Eval { moves } => run_eval(&moves),
    }
}

/// Builds the log filter: `RUST_LOG` if set, else the configured default.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Run the HTTP server
async fn run_http_server(
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = ServerConfig::load(config.as_deref())?.with_overrides(host, port);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .init();

    info!(host = %config.host(), port = config.port(), "Starting tic-tac-toe evaluator on HTTP");
    serve(&config).await
}

/// Run the MCP server (stdio mode)
async fn run_mcp_server() -> Result<()> {
    let config = ServerConfig::load(None)?;

    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("Starting tic-tac-toe evaluator MCP server");
    let service = EvaluatorServer::new().serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

/// Evaluate one sequence and print the response JSON
fn run_eval(moves: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();

    let result = evaluate(moves);
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
