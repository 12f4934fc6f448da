//! HTTP endpoint for move evaluation.

use crate::ServerConfig;
use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::{Method, Request, StatusCode},
    routing::any,
};
use tictactoe_eval::{GameResult, MoveEvaluator};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Path of the evaluation endpoint.
pub const EVALUATE_PATH: &str = "/api/evaluate";

/// Builds the application router.
pub fn router(evaluator: MoveEvaluator) -> Router {
    Router::new()
        .route(EVALUATE_PATH, any(evaluate))
        .with_state(evaluator)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
}

/// Evaluates the `moves` field of a JSON body.
///
/// The body is decoded as JSON whatever its content type. A body without a
/// `moves` string is answered with 403; every other classification,
/// illegal move sequences included, with 200.
#[instrument(skip(evaluator, method, body), fields(method = %method, len = body.len()))]
async fn evaluate(
    State(evaluator): State<MoveEvaluator>,
    method: Method,
    body: Bytes,
) -> (StatusCode, Json<GameResult>) {
    let result = evaluator.evaluate_slice(&body);

    let status = if result.state().is_request_error() {
        StatusCode::FORBIDDEN
    } else {
        StatusCode::OK
    };
    info!(%status, state = %result.state(), "Evaluated moves");
    (status, Json(result))
}

/// Binds the configured address and serves until the process is stopped.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), config.port())).await?;
    info!(addr = %listener.local_addr()?, path = EVALUATE_PATH, "Server ready");

    axum::serve(listener, router(MoveEvaluator::new())).await?;
    Ok(())
}
