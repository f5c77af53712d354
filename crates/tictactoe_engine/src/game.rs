//! The single game instance and its move validation.

use crate::rules::{has_won, is_full};
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameStatus, Player, Position, Square};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Opaque identifier of a game, stable for the game's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Draws a random (version 4) identifier from `rng`.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Reason a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Row or column outside the board.
    #[display("Position is out of bounds")]
    OutOfBounds,
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),
}

/// A game of tic-tac-toe: board, whose turn it is, and the outcome so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl Game {
    /// Creates an empty game with `X` to move.
    #[instrument]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the game id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether a win or draw has been reached.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Places `player`'s mark at `pos` and settles the outcome.
    ///
    /// On a win or draw the turn is left where it was; otherwise it passes
    /// to the opponent. A rejected move leaves the game untouched.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }
        if self.turn != player {
            return Err(Rejection::NotYourTurn(player));
        }
        if !self.board.is_empty(pos) {
            return Err(Rejection::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(player));

        if has_won(&self.board, player) {
            self.status = GameStatus::Won(player);
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.turn = player.opponent();
        }

        debug!(status = ?self.status, board = %self.board.display(), "Mark placed");
        Ok(())
    }

    /// Wire view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            player_turn: self.turn,
            status: self.status.message().to_string(),
            game_over: self.is_over(),
            game_id: self.id,
        }
    }
}
