//! # 2048 Game Server Library
//!
//! A single-player 2048 server: one persisted 4x4 board, moves applied through
//! a small state machine, and optional move suggestions from a chat model.
//!
//! ## Features
//!
//! - **Board Engine**: pure move/merge, tile spawn and win/lose detection
//! - **Game Service**: restart and move orchestration over a persisted board
//! - **Suggestion Agent**: prompt building, LLM call and validated replies
//! - **API Server**: axum routes for restart, move and suggest
//!
//! ## Usage
//!
//! ```rust
//! use twenty48_server::{move_left, Board};
//!
//! let board = Board([[0, 8, 8, 8], [0; 4], [0; 4], [0; 4]]);
//! assert_eq!(move_left(&board).rows()[0], [16, 8, 0, 0]);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board engine: moves, spawning and terminal states
pub mod game;

/// Game orchestration and persistence
pub mod services;

/// LLM move suggestions
pub mod agent;

/// HTTP API
pub mod servers;

/// Logger initialization
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use services::{BoardStore, GameService, JsonFileStore, MoveOutcome, Status};

pub use servers::{create_router, AppState};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the 2048 server
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GameError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
