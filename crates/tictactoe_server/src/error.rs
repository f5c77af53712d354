//! Errors returned to HTTP clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Failure of an API request.
///
/// Illegal moves are not errors; they return the unchanged game with 200.
/// Only a move request that lacks usable `row`/`col` values is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// The move body was missing `row` or `col`, or was not a JSON object
    /// with integer coordinates.
    #[display("Invalid move data")]
    InvalidMoveData,
    /// A previous request panicked while holding the game lock.
    #[display("Game engine unavailable")]
    EngineUnavailable,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidMoveData => StatusCode::BAD_REQUEST,
            ApiError::EngineUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::InvalidMoveData => {
                warn!(error = %self, "Rejecting move request");
                self.to_string()
            }
            ApiError::EngineUnavailable => {
                error!(error = %self, "Request failed");
                "Internal server error".to_string()
            }
        };
        (self.status(), Json(ErrorBody::new(message))).into_response()
    }
}
