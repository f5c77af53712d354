//! HTTP routes. Each handler locks the engine once and returns its snapshot.

use crate::error::ApiError;
use crate::state::SharedEngine;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tictactoe_engine::{GameSnapshot, MoveOutcome};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument};

/// Method, path and purpose of every route, for the startup banner.
pub const ENDPOINTS: [(&str, &str, &str); 5] = [
    ("POST", "/api/init", "Initialize new game"),
    ("POST", "/api/move", "Make a move"),
    ("POST", "/api/reset", "Reset game"),
    ("GET", "/api/status", "Get game status"),
    ("GET", "/health", "Health check"),
];

/// Body of `POST /api/move`.
///
/// Both fields are optional at the type level so that a missing coordinate
/// can be told apart from an illegal one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveRequest {
    /// Row index, expected in 0-2.
    pub row: Option<i64>,
    /// Column index, expected in 0-2.
    pub col: Option<i64>,
}

impl MoveRequest {
    /// Reads `row` and `col` from a JSON object.
    ///
    /// A coordinate that is absent, `null` or not an integer is `None`.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            row: object.get("row").and_then(Value::as_i64),
            col: object.get("col").and_then(Value::as_i64),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
    /// Free-form liveness message.
    pub message: String,
}

/// Builds the application router around `engine`.
///
/// Cross-origin requests are allowed from any origin, without credentials.
pub fn router(engine: SharedEngine) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/init", post(init_game))
        .route("/api/move", post(make_move))
        .route("/api/reset", post(reset_game))
        .route("/api/status", get(game_status))
        .route("/health", get(health_check))
        .with_state(engine)
        .layer(
            ServiceBuilder::new()
                .map_request(|req: Request| {
                    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
                    req
                })
                .layer(cors),
        )
}

/// Starts a fresh game.
#[instrument(skip(engine))]
async fn init_game(State(engine): State<SharedEngine>) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = engine.create()?;
    info!(game_id = %snapshot.game_id, "Game initialized");
    Ok(Json(snapshot))
}

/// Plays the human's move and the computer's reply.
///
/// Illegal moves (occupied square, off the board, game over) are ignored
/// on purpose and answered with the unchanged game and 200. Only a body
/// without usable `row` and `col` is a 400.
#[instrument(skip(engine, payload))]
async fn make_move(
    State(engine): State<SharedEngine>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let Json(object) = payload.map_err(|rejection| {
        debug!(%rejection, "Move body is not a JSON object");
        ApiError::InvalidMoveData
    })?;
    let request = MoveRequest::from_object(&object);

    let (Some(row), Some(col)) = (request.row, request.col) else {
        return Err(ApiError::InvalidMoveData);
    };

    let (outcome, snapshot) = engine.apply_move(row, col)?;
    match outcome {
        MoveOutcome::Applied { reply } => info!(
            row,
            col,
            ?reply,
            game_over = snapshot.game_over,
            status = %snapshot.status,
            "Move applied"
        ),
        MoveOutcome::Ignored(rejection) => info!(row, col, %rejection, "Move ignored"),
    }
    Ok(Json(snapshot))
}

/// Same as init.
#[instrument(skip(engine))]
async fn reset_game(State(engine): State<SharedEngine>) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = engine.reset()?;
    info!(game_id = %snapshot.game_id, "Game reset");
    Ok(Json(snapshot))
}

#[instrument(skip(engine))]
async fn game_status(State(engine): State<SharedEngine>) -> Result<Json<GameSnapshot>, ApiError> {
    Ok(Json(engine.current_state()?))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new(
        "healthy".to_string(),
        "Tic Tac Toe API is running".to_string(),
    ))
}
