//! Move sequence replay and classification.

use super::{
    EvaluateRequest, GameResult, GameState, Line, MoveError, Player, RequestError, Tile,
    TileSet,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Longest accepted move string: nine two-character tile codes.
///
/// Measured in Unicode scalar values (`char`s), not UTF-16 code units, so
/// ten astral characters are an unknown move rather than an overlong string.
pub const MAX_MOVES_LEN: usize = 18;

/// Ply that fills the last free tile.
const FINAL_PLY: usize = 8;

/// Classifies move sequences.
///
/// Stateless; every call replays its input from an empty board.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveEvaluator;

impl MoveEvaluator {
    /// Creates an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an untyped request body.
    ///
    /// A body without a `moves` string yields `Illegal Request`.
    #[instrument(skip(self, body))]
    pub fn evaluate(&self, body: &Value) -> GameResult {
        self.evaluate_request(EvaluateRequest::from_value(body))
    }

    /// Evaluates raw body bytes, decoded as JSON.
    ///
    /// Bytes that are not JSON yield `Illegal Request`.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn evaluate_slice(&self, bytes: &[u8]) -> GameResult {
        self.evaluate_request(EvaluateRequest::from_slice(bytes))
    }

    fn evaluate_request(&self, request: Result<EvaluateRequest, RequestError>) -> GameResult {
        match request {
            Ok(request) => self.evaluate_moves(&request.moves),
            Err(e) => {
                warn!(error = %e, "Rejecting request");
                GameState::from(&e).into()
            }
        }
    }

    /// Evaluates a move string.
    #[instrument(skip(self), fields(state))]
    pub fn evaluate_moves(&self, moves: &str) -> GameResult {
        let result = replay(moves).unwrap_or_else(|e| {
            debug!(error = %e, "Move sequence rejected");
            GameState::from(&e).into()
        });
        tracing::Span::current().record("state", tracing::field::display(result.state()));
        result
    }
}

/// Evaluates a move string with a default [`MoveEvaluator`].
pub fn evaluate(moves: &str) -> GameResult {
    MoveEvaluator::new().evaluate_moves(moves)
}

/// Tiles claimed so far, overall and per player.
#[derive(Debug, Default)]
struct Board {
    taken: TileSet,
    x: TileSet,
    o: TileSet,
}

impl Board {
    /// Claims `tile` for `player` and returns that player's tiles.
    fn claim(&mut self, ply: usize, player: Player, tile: Tile) -> Result<&TileSet, MoveError> {
        if !self.taken.insert(tile) {
            return Err(MoveError::Duplicate { ply, tile });
        }
        let owned = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        owned.insert(tile);
        Ok(owned)
    }
}

/// Splits a move string into two-character chunks.
///
/// An odd trailing character comes out as a one-character chunk.
fn chunks(moves: &str) -> impl Iterator<Item = &str> {
    let mut rest = moves;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let split = rest.char_indices().nth(2).map_or(rest.len(), |(i, _)| i);
        let (chunk, tail) = rest.split_at(split);
        rest = tail;
        Some(chunk)
    })
}

/// Replays `moves` from an empty board, stopping at the first violation.
fn replay(moves: &str) -> Result<GameResult, MoveError> {
    let length = moves.chars().count();
    if length == 0 {
        return Ok(GameState::PlayerXTurns.into());
    }
    if length > MAX_MOVES_LEN {
        return Err(MoveError::TooLong {
            length,
            max: MAX_MOVES_LEN,
        });
    }

    let mut board = Board::default();
    let mut consumed = 0;
    let mut plies = 0;

    for (ply, chunk) in chunks(moves).enumerate() {
        consumed += chunk.chars().count();
        let remaining = length - consumed;
        let player = Player::for_ply(ply);

        let tile: Tile = chunk
            .parse()
            .map_err(|source| MoveError::Unknown { ply, source })?;
        let owned = board.claim(ply, player, tile)?;
        debug!(ply, %player, %tile, "Applied move");

        if let Some(line) = Line::first_completed(owned) {
            if remaining > 0 {
                return Err(MoveError::ExtraMove { ply, remaining });
            }
            return Ok(GameResult::won(player, line));
        }

        if ply == FINAL_PLY {
            return Ok(GameState::Draw.into());
        }
        plies = ply + 1;
    }

    Ok(GameState::turn(Player::for_ply(plies)).into())
}
