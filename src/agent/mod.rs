//! Move suggestions from an external chat model.
//!
//! The agent reads the stored board, formats it into a prompt, sends it to
//! the chat-completions backend and validates the JSON it gets back. A reply
//! that does not validate is replaced by [`AgentResponse::fallback`]; errors
//! reaching the backend are returned to the caller.

use async_trait::async_trait;

pub mod config;
pub mod game_agent;
pub mod groq;
pub mod prompt;
pub mod schemas;

pub use config::AgentConfig;
pub use game_agent::GameAgent;
pub use groq::{ChatBackend, GroqClient, GroqConfig};
pub use schemas::{AgentResponse, Move, ParseError};

use crate::Result;

/// Source of move recommendations for the API layer.
#[async_trait]
pub trait MoveAdvisor: Send + Sync {
    async fn suggest(&self, num_suggestions: u32) -> Result<AgentResponse>;
}
