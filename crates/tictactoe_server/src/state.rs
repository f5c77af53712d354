//! Process-wide handle to the one game engine.

use crate::error::ApiError;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use tictactoe_engine::{GameEngine, GameSnapshot, MoveOutcome};
use tracing::{error, instrument};

/// Cloneable handle to the shared [`GameEngine`].
///
/// Every operation takes the lock for its whole duration, so a move and its
/// computer reply are never interleaved with another request.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine<StdRng>>>,
}

impl SharedEngine {
    /// Creates a handle to an engine seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::from_engine(GameEngine::new())
    }

    /// Wraps an existing engine, e.g. one built with a seeded RNG.
    pub fn from_engine(engine: GameEngine<StdRng>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn with<T>(&self, f: impl FnOnce(&mut GameEngine<StdRng>) -> T) -> Result<T, ApiError> {
        let mut engine = self.inner.lock().map_err(|_| {
            error!("Game engine lock poisoned");
            ApiError::EngineUnavailable
        })?;
        Ok(f(&mut *engine))
    }

    /// Starts a fresh game, replacing the current one.
    pub fn create(&self) -> Result<GameSnapshot, ApiError> {
        self.with(GameEngine::create)
    }

    /// Same as [`create`](Self::create).
    pub fn reset(&self) -> Result<GameSnapshot, ApiError> {
        self.with(GameEngine::reset)
    }

    /// Applies a human move and returns the outcome with the resulting state.
    pub fn apply_move(&self, row: i64, col: i64) -> Result<(MoveOutcome, GameSnapshot), ApiError> {
        self.with(|engine| {
            let outcome = engine.apply_move(row, col);
            (outcome, engine.current_state())
        })
    }

    /// Snapshot of the current game.
    pub fn current_state(&self) -> Result<GameSnapshot, ApiError> {
        self.with(|engine| engine.current_state())
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new()
    }
}
