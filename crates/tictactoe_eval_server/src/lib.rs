//! Serving surfaces for the tic-tac-toe move evaluator.
//!
//! # Architecture
//!
//! - **HTTP**: `/api/evaluate` accepts `{"moves": "..."}` and answers with
//!   `{"state": ..., "winning_tiles": [...]}`
//! - **MCP**: an `evaluate` tool over stdio for LLM clients
//! - **Config**: TOML file, `EVAL_*` environment variables and CLI flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod http;
mod mcp;

pub use config::{ConfigError, ConfigErrorKind, HOST_VAR, LOG_VAR, PORT_VAR, ServerConfig};
pub use http::{EVALUATE_PATH, router, serve};
pub use mcp::EvaluatorServer;
