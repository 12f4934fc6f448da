//! Tests for the HTTP evaluation endpoint.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tictactoe_eval::MoveEvaluator;
use tictactoe_eval_server::{EVALUATE_PATH, router};
use tower::ServiceExt;

async fn send(method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let response = router(MoveEvaluator::new()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post(body: Value) -> (StatusCode, Value) {
    send(Method::POST, EVALUATE_PATH, body.to_string()).await
}

#[tokio::test]
async fn test_empty_moves_is_x_to_move() {
    let (status, body) = post(json!({"moves": ""})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"state": "Player X Turns", "winning_tiles": []}));
}

#[tokio::test]
async fn test_win_returns_winning_tiles() {
    let (status, body) = post(json!({"moves": "A1B1A2B2A3"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"state": "Player X Wins", "winning_tiles": ["A1", "A2", "A3"]})
    );
}

#[tokio::test]
async fn test_illegal_moves_are_ok_responses() {
    for (moves, state) in [
        ("A1A1", "Illegal Duplicate Move"),
        ("Z9", "Illegal Unknown Move"),
        ("A1B1A2B2A3C1", "Illegal Extra Move"),
        ("A1B1C1A2B2C2A3B3C3A1", "Illegal Move Length"),
    ] {
        let (status, body) = post(json!({ "moves": moves })).await;
        assert_eq!(status, StatusCode::OK, "{moves:?}");
        assert_eq!(body["state"], state, "{moves:?}");
        assert_eq!(body["winning_tiles"], json!([]), "{moves:?}");
    }
}

#[tokio::test]
async fn test_non_string_moves_is_forbidden() {
    for body in [json!({}), json!({"moves": 7}), json!({"moves": null})] {
        let (status, response) = post(body.clone()).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{body}");
        assert_eq!(
            response,
            json!({"state": "Illegal Request", "winning_tiles": []})
        );
    }
}

#[tokio::test]
async fn test_body_without_json_is_forbidden() {
    let (status, body) = send(Method::GET, EVALUATE_PATH, Body::empty()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["state"], "Illegal Request");

    let (status, _) = send(Method::POST, EVALUATE_PATH, "moves=A1").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = send(Method::POST, "/api/other", json!({"moves": ""}).to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
