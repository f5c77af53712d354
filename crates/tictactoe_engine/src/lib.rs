//! Tic-tac-toe engine for a single human-versus-computer game.
//!
//! The human always plays `X` and moves first. Every accepted human move is
//! answered synchronously by the computer (`O`), which picks a uniformly
//! random empty square. Moves that cannot be played are ignored rather than
//! reported as errors; see [`GameEngine::apply_move`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_engine::{GameEngine, MoveOutcome, Position, Square, Player};
//!
//! let mut engine = GameEngine::with_rng(StdRng::seed_from_u64(7));
//! let outcome = engine.apply_move(1, 1);
//! assert!(matches!(outcome, MoveOutcome::Applied { .. }));
//!
//! let snapshot = engine.current_state();
//! let center = Position::new(1, 1).unwrap();
//! assert_eq!(snapshot.board.get(center), Square::Occupied(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod game;
mod opponent;
pub mod rules;
mod snapshot;
mod types;

pub use engine::{GameEngine, MoveOutcome};
pub use game::{Game, GameId, Rejection};
pub use opponent::choose_reply;
pub use snapshot::GameSnapshot;
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Position, Square};
