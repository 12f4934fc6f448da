//! Game state classifications and evaluation results.

use super::{Line, Player, Tile};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Classification of a move sequence.
///
/// Serialized as the human-readable label (e.g. `"Player X Turns"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum GameState {
    /// Player X is to move.
    #[serde(rename = "Player X Turns")]
    #[strum(serialize = "Player X Turns")]
    PlayerXTurns,
    /// Player O is to move.
    #[serde(rename = "Player O Turns")]
    #[strum(serialize = "Player O Turns")]
    PlayerOTurns,
    /// Player X completed a line with the last move.
    #[serde(rename = "Player X Wins")]
    #[strum(serialize = "Player X Wins")]
    PlayerXWins,
    /// Player O completed a line with the last move.
    #[serde(rename = "Player O Wins")]
    #[strum(serialize = "Player O Wins")]
    PlayerOWins,
    /// The board is full with no winner.
    #[serde(rename = "Draw")]
    #[strum(serialize = "Draw")]
    Draw,
    /// The request did not carry a `moves` string.
    #[serde(rename = "Illegal Request")]
    #[strum(serialize = "Illegal Request")]
    IllegalRequest,
    /// The move string is too long.
    #[serde(rename = "Illegal Move Length")]
    #[strum(serialize = "Illegal Move Length")]
    IllegalMoveLength,
    /// A chunk of the move string is not a tile code.
    #[serde(rename = "Illegal Unknown Move")]
    #[strum(serialize = "Illegal Unknown Move")]
    IllegalUnknownMove,
    /// A tile was selected twice.
    #[serde(rename = "Illegal Duplicate Move")]
    #[strum(serialize = "Illegal Duplicate Move")]
    IllegalDuplicateMove,
    /// A move was made after the game was already won.
    #[serde(rename = "Illegal Extra Move")]
    #[strum(serialize = "Illegal Extra Move")]
    IllegalExtraMove,
}

impl GameState {
    /// The player to move next.
    pub fn turn(player: Player) -> Self {
        match player {
            Player::X => GameState::PlayerXTurns,
            Player::O => GameState::PlayerOTurns,
        }
    }

    /// The state announcing `player` as winner.
    pub fn win(player: Player) -> Self {
        match player {
            Player::X => GameState::PlayerXWins,
            Player::O => GameState::PlayerOWins,
        }
    }

    /// Any `Illegal ...` classification.
    pub fn is_illegal(self) -> bool {
        matches!(
            self,
            GameState::IllegalRequest
                | GameState::IllegalMoveLength
                | GameState::IllegalUnknownMove
                | GameState::IllegalDuplicateMove
                | GameState::IllegalExtraMove
        )
    }

    /// Malformed request rather than a malformed move sequence.
    ///
    /// Callers on an HTTP boundary answer this one with a rejection status.
    pub fn is_request_error(self) -> bool {
        self == GameState::IllegalRequest
    }

    /// Won or drawn.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GameState::PlayerXWins | GameState::PlayerOWins | GameState::Draw
        )
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::PlayerXWins => Some(Player::X),
            GameState::PlayerOWins => Some(Player::O),
            _ => None,
        }
    }
}

/// Outcome of evaluating a move sequence.
///
/// `winning_tiles` is empty unless the state is a win, in which case it
/// holds the three tiles of the completed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Getters)]
pub struct GameResult {
    /// Classification label.
    #[getter(copy)]
    state: GameState,
    /// Tiles of the completed line.
    winning_tiles: Vec<Tile>,
}

impl GameResult {
    /// Creates a result with no winning tiles.
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            winning_tiles: Vec::new(),
        }
    }

    /// Creates a win for `player` along `line`.
    pub fn won(player: Player, line: Line) -> Self {
        Self {
            state: GameState::win(player),
            winning_tiles: line.tiles().to_vec(),
        }
    }
}

impl From<GameState> for GameResult {
    fn from(state: GameState) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LINES;
    use strum::IntoEnumIterator;

    #[test]
    fn test_labels_match_wire_format() {
        for state in GameState::iter() {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, serde_json::Value::String(state.to_string()));
            assert_eq!(state.to_string().parse::<GameState>().unwrap(), state);
        }
        assert_eq!(GameState::IllegalExtraMove.to_string(), "Illegal Extra Move");
    }

    #[test]
    fn test_classification_predicates() {
        let illegal = GameState::iter().filter(|s| s.is_illegal()).count();
        let finished = GameState::iter().filter(|s| s.is_finished()).count();
        assert_eq!(illegal, 5);
        assert_eq!(finished, 3);
        assert!(GameState::IllegalRequest.is_request_error());
        assert!(!GameState::IllegalMoveLength.is_request_error());
        assert_eq!(GameState::PlayerOWins.winner(), Some(Player::O));
        assert_eq!(GameState::Draw.winner(), None);
    }

    #[test]
    fn test_result_serialization() {
        let result = GameResult::won(Player::X, LINES[3]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": "Player X Wins",
                "winning_tiles": ["A1", "A2", "A3"],
            })
        );

        let json = serde_json::to_value(GameResult::new(GameState::Draw)).unwrap();
        assert_eq!(json, serde_json::json!({"state": "Draw", "winning_tiles": []}));
    }
}
