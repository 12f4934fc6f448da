//! MCP server exposing the evaluator as a tool.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use tictactoe_eval::{EvaluateRequest, MoveEvaluator};
use tracing::{info, instrument};

/// MCP handler with a single `evaluate` tool.
pub struct EvaluatorServer {
    evaluator: MoveEvaluator,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl EvaluatorServer {
    /// Creates a new server.
    pub fn new() -> Self {
        info!("Creating evaluator MCP server");
        Self {
            evaluator: MoveEvaluator::new(),
            tool_router: Self::tool_router(),
        }
    }

    /// Classifies a move sequence.
    #[instrument(skip(self, req), fields(moves = %req.moves))]
    #[tool(
        description = "Evaluate a tic-tac-toe move sequence. `moves` concatenates tile codes \
                       (A1..C3, column letter then row number) in play order, X first. \
                       Returns JSON {state, winning_tiles}."
    )]
    pub async fn evaluate(
        &self,
        Parameters(req): Parameters<EvaluateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.evaluator.evaluate_moves(&req.moves);
        info!(state = %result.state(), "Evaluated moves");

        let body = serde_json::to_string(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(body)]))
    }
}

impl Default for EvaluatorServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for EvaluatorServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some("Tic-tac-toe move sequence evaluator".into());
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info
    }
}
