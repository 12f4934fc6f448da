//! Error types for move replay and request parsing.

use super::{GameState, Tile, UnknownTile};
use derive_more::{Display, Error};

/// A move that cannot be applied during replay.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The move string is longer than a full game.
    #[display("Move string has {} characters, at most {} allowed", length, max)]
    TooLong {
        /// Length of the move string in characters.
        length: usize,
        /// Maximum length.
        max: usize,
    },

    /// A chunk does not name a tile.
    #[display("Ply {}: {}", ply, source)]
    Unknown {
        /// Zero-indexed ply of the chunk.
        ply: usize,
        /// Parse failure.
        source: UnknownTile,
    },

    /// The tile was taken earlier in the sequence.
    #[display("Ply {}: tile {} is already taken", ply, tile)]
    Duplicate {
        /// Zero-indexed ply of the move.
        ply: usize,
        /// The contested tile.
        tile: Tile,
    },

    /// Moves follow a completed line.
    #[display("Ply {}: game was already won, {} more characters follow", ply, remaining)]
    ExtraMove {
        /// Zero-indexed ply that completed the line.
        ply: usize,
        /// Characters left after the winning move.
        remaining: usize,
    },
}

impl From<&MoveError> for GameState {
    fn from(err: &MoveError) -> Self {
        match err {
            MoveError::TooLong { .. } => GameState::IllegalMoveLength,
            MoveError::Unknown { .. } => GameState::IllegalUnknownMove,
            MoveError::Duplicate { .. } => GameState::IllegalDuplicateMove,
            MoveError::ExtraMove { .. } => GameState::IllegalExtraMove,
        }
    }
}

/// Kind of JSON value found where a string was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum JsonKind {
    /// `null`
    #[display("null")]
    Null,
    /// `true` / `false`
    #[display("boolean")]
    Bool,
    /// Any number.
    #[display("number")]
    Number,
    /// A string.
    #[display("string")]
    String,
    /// An array.
    #[display("array")]
    Array,
    /// An object.
    #[display("object")]
    Object,
}

impl From<&serde_json::Value> for JsonKind {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

/// A request body that does not carry a `moves` string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RequestError {
    /// The body is not valid JSON.
    #[display("Request body is not valid JSON: {}", _0)]
    MalformedBody(#[error(not(source))] String),

    /// The body is JSON but not an object.
    #[display("Request body is a JSON {}, expected an object", _0)]
    NotAnObject(#[error(not(source))] JsonKind),

    /// The object has no `moves` field.
    #[display("Request body has no moves field")]
    MissingMoves,

    /// The `moves` field is not a string.
    #[display("moves must be a string, found {}", found)]
    MovesNotAString {
        /// Kind of the value found.
        found: JsonKind,
    },
}

impl From<&RequestError> for GameState {
    fn from(_: &RequestError) -> Self {
        GameState::IllegalRequest
    }
}
