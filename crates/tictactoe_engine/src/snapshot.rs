//! Serializable view of the current game.

use crate::game::GameId;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Full game state as returned by every game endpoint.
///
/// ```json
/// { "board": [["X","",""],["","O",""],["","",""]],
///   "player_turn": "X", "status": "", "game_over": false,
///   "game_id": "5f0c..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Rows of `""`, `"X"` or `"O"`.
    pub board: Board,
    /// Whose mark goes down next.
    pub player_turn: Player,
    /// Outcome message, empty while the game is running.
    pub status: String,
    /// True once a win or draw is reached.
    pub game_over: bool,
    /// Identifier of the game.
    pub game_id: GameId,
}
