//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

const fn pos(index: usize) -> Position {
    Position::ALL[index]
}

/// Every line of three: rows, columns, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [pos(0), pos(1), pos(2)],
    [pos(3), pos(4), pos(5)],
    [pos(6), pos(7), pos(8)],
    // Columns
    [pos(0), pos(3), pos(6)],
    [pos(1), pos(4), pos(7)],
    [pos(2), pos(5), pos(8)],
    // Diagonals
    [pos(0), pos(4), pos(8)],
    [pos(2), pos(4), pos(6)],
];

/// Returns true if `player` holds all three squares of any line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|p| board.get(*p) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    <Player as strum::IntoEnumIterator>::iter().find(|player| has_won(board, *player))
}
