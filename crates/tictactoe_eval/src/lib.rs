//! Tic-tac-toe move sequence evaluation.
//!
//! A game is submitted as a single string of concatenated two-character
//! tile codes (`A1` .. `C3`) in play order. Player X makes the even plies,
//! Player O the odd ones. Evaluation replays the string from an empty
//! board and classifies it as a turn indicator, a win (with the three
//! winning tiles), a draw, or one of several illegal states.
//!
//! # Example
//!
//! ```
//! use tictactoe_eval::{GameState, Tile, evaluate};
//!
//! let result = evaluate("A1B1A2B2A3");
//! assert_eq!(result.state(), GameState::PlayerXWins);
//! assert_eq!(result.winning_tiles(), &vec![Tile::A1, Tile::A2, Tile::A3]);
//!
//! assert_eq!(evaluate("A1A1").state(), GameState::IllegalDuplicateMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod evaluator;
mod line;
mod player;
mod request;
mod state;
mod tile;

pub use error::{JsonKind, MoveError, RequestError};
pub use evaluator::{MAX_MOVES_LEN, MoveEvaluator, evaluate};
pub use line::{LINES, Line};
pub use player::Player;
pub use request::EvaluateRequest;
pub use state::{GameResult, GameState};
pub use tile::{Tile, TileSet, UnknownTile};
