//! HTTP API around a single shared tic-tac-toe game.
//!
//! # Architecture
//!
//! - **Engine**: [`SharedEngine`] owns the one current game behind a mutex
//! - **Routes**: thin axum handlers that lock the engine and return its snapshot
//! - **Config**: host/port from CLI flags, `HOST`/`PORT`, or a TOML file
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_server::{ServerConfig, SharedEngine, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(SharedEngine::new());
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod routes;
mod state;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use routes::{ENDPOINTS, HealthResponse, MoveRequest, router};
pub use state::SharedEngine;
