//! Strict parsing of evaluation request bodies.

use super::{JsonKind, RequestError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Request to evaluate a move sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluateRequest {
    /// Concatenated two-character tile codes in play order, e.g. `"A1B2C3"`.
    pub moves: String,
}

impl EvaluateRequest {
    /// Creates a request for the given move string.
    pub fn new(moves: impl Into<String>) -> Self {
        Self {
            moves: moves.into(),
        }
    }

    /// Extracts the `moves` string from an untyped JSON body.
    ///
    /// Fields other than `moves` are ignored.
    #[instrument(skip(body), fields(kind = %JsonKind::from(body)))]
    pub fn from_value(body: &Value) -> Result<Self, RequestError> {
        let Value::Object(fields) = body else {
            return Err(RequestError::NotAnObject(JsonKind::from(body)));
        };
        match fields.get("moves") {
            None => Err(RequestError::MissingMoves),
            Some(Value::String(moves)) => {
                debug!(length = moves.len(), "Parsed moves field");
                Ok(Self::new(moves.as_str()))
            }
            Some(other) => Err(RequestError::MovesNotAString {
                found: JsonKind::from(other),
            }),
        }
    }

    /// Decodes raw body bytes as JSON, then extracts `moves`.
    #[instrument(skip(bytes), fields(len = bytes.len()))]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RequestError> {
        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| RequestError::MalformedBody(e.to_string()))?;
        Self::from_value(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_moves_string() {
        let req = EvaluateRequest::from_value(&json!({"moves": "A1B2"})).unwrap();
        assert_eq!(req.moves, "A1B2");
    }

    #[test]
    fn test_ignores_extra_fields() {
        let req =
            EvaluateRequest::from_value(&json!({"moves": "", "player": "X"})).unwrap();
        assert_eq!(req, EvaluateRequest::new(""));
    }

    #[test]
    fn test_rejects_non_string_moves() {
        assert_eq!(
            EvaluateRequest::from_value(&json!({"moves": ["A1"]})),
            Err(RequestError::MovesNotAString {
                found: JsonKind::Array
            })
        );
        assert_eq!(
            EvaluateRequest::from_value(&json!({"moves": null})),
            Err(RequestError::MovesNotAString {
                found: JsonKind::Null
            })
        );
    }

    #[test]
    fn test_rejects_missing_moves_and_non_objects() {
        assert_eq!(
            EvaluateRequest::from_value(&json!({})),
            Err(RequestError::MissingMoves)
        );
        assert_eq!(
            EvaluateRequest::from_value(&json!("A1")),
            Err(RequestError::NotAnObject(JsonKind::String))
        );
    }

    #[test]
    fn test_from_slice_rejects_invalid_json() {
        assert!(matches!(
            EvaluateRequest::from_slice(b"moves=A1"),
            Err(RequestError::MalformedBody(_))
        ));
        assert!(matches!(
            EvaluateRequest::from_slice(b""),
            Err(RequestError::MalformedBody(_))
        ));
        assert_eq!(
            EvaluateRequest::from_slice(br#"{"moves":"B2"}"#),
            Ok(EvaluateRequest::new("B2"))
        );
    }
}
