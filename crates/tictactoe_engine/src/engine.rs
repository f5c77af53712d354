//! Owner of the one current game.

use crate::game::{Game, GameId, Rejection};
use crate::opponent::choose_reply;
use crate::snapshot::GameSnapshot;
use crate::types::{Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveOutcome {
    /// The human's mark was placed. `reply` is the computer's answer, absent
    /// when the human's move ended the game.
    #[display("Move applied (reply: {:?})", reply)]
    Applied {
        /// Square the computer played, if it moved.
        reply: Option<Position>,
    },
    /// The move was dropped and the game left untouched.
    #[display("Move ignored: {}", _0)]
    Ignored(Rejection),
}

/// Holds the current game and the random source used for the computer's
/// replies and for game ids.
///
/// Illegal moves are ignored on purpose: an out-of-range, occupied, late or
/// out-of-turn move leaves the game exactly as it was, and the caller gets
/// the unchanged state back. [`MoveOutcome`] reports why, for logging only.
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    game: Game,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine drawing all randomness from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let game = Game::new(GameId::random(&mut rng));
        info!(game_id = %game.id(), "Game engine ready");
        Self { game, rng }
    }

    /// Replaces the current game with a fresh one and returns it.
    #[instrument(skip(self), fields(previous = %self.game.id()))]
    pub fn create(&mut self) -> GameSnapshot {
        self.game = Game::new(GameId::random(&mut self.rng));
        info!(game_id = %self.game.id(), "New game created");
        self.game.snapshot()
    }

    /// Same as [`create`](Self::create).
    pub fn reset(&mut self) -> GameSnapshot {
        self.create()
    }

    /// Snapshot of the current game.
    pub fn current_state(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Read access to the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays the human's `X` at (`row`, `col`) and, if the game goes on,
    /// the computer's `O` reply.
    ///
    /// Coordinates are checked before the board is touched. Any move that
    /// cannot be played is ignored (see the type-level docs).
    #[instrument(skip(self), fields(game_id = %self.game.id()))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> MoveOutcome {
        let Some(pos) = Position::new(row, col) else {
            debug!("Coordinates off the board, ignoring move");
            return MoveOutcome::Ignored(Rejection::OutOfBounds);
        };

        if let Err(rejection) = self.game.place(pos, Player::X) {
            debug!(%rejection, "Ignoring move");
            return MoveOutcome::Ignored(rejection);
        }

        if self.game.is_over() {
            info!(status = self.game.status().message(), "Game over after human move");
            return MoveOutcome::Applied { reply: None };
        }

        let reply = choose_reply(self.game.board(), &mut self.rng);
        match reply {
            Some(reply_pos) => {
                if let Err(rejection) = self.game.place(reply_pos, Player::O) {
                    warn!(%rejection, "Computer reply was not playable");
                }
            }
            None => warn!("No empty square for the computer reply"),
        }

        if self.game.is_over() {
            info!(status = self.game.status().message(), "Game over after computer move");
        }
        MoveOutcome::Applied { reply }
    }
}
