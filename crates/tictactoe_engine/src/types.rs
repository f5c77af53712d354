//! Core domain types for tic-tac-toe.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
///
/// `X` is always the human, `O` is always the computer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// The human player (moves first).
    X,
    /// The computer player.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Serialized as `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Mark text as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mark = String::deserialize(deserializer)?;
        match mark.as_str() {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Player::X)),
            "O" => Ok(Square::Occupied(Player::O)),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &r#""", "X" or "O""#,
            )),
        }
    }
}

/// A position on the board, addressed by row and column.
///
/// Only constructible through [`Position::new`], so every `Position` is in
/// bounds and indexing with it cannot panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Creates a position, or `None` if either coordinate is outside `0..3`.
    ///
    /// Accepts signed input so that negative coordinates coming off the wire
    /// are rejected here instead of wrapping.
    #[instrument]
    pub fn new(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < BOARD_SIZE)?;
        let col = usize::try_from(col).ok().filter(|c| *c < BOARD_SIZE)?;
        Some(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board, serialized as nested rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row][pos.col]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row][pos.col] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Positions of all empty squares, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        Position::ALL.len() - self.empty_positions().len()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|sq| match sq {
                        Square::Empty => ".",
                        other => other.as_str(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Message shown to the human player; empty while the game is running.
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::InProgress => "",
            GameStatus::Won(Player::X) => "🎉 You Win!",
            GameStatus::Won(Player::O) => "😔 AI Wins!",
            GameStatus::Draw => "🤝 Draw!",
        }
    }
}
