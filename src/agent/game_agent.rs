use async_trait::async_trait;
use std::sync::Arc;

use crate::agent::config::AgentConfig;
use crate::agent::groq::{ChatBackend, ChatMessage, ChatRequest};
use crate::agent::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::agent::schemas::{parse_agent_response, AgentResponse};
use crate::agent::MoveAdvisor;
use crate::services::store::BoardStore;
use crate::Result;

/// Asks the chat model for move recommendations on the stored board.
pub struct GameAgent {
    config: AgentConfig,
    store: Arc<dyn BoardStore>,
    backend: Arc<dyn ChatBackend>,
}

impl GameAgent {
    pub fn new(config: AgentConfig, store: Arc<dyn BoardStore>, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            config,
            store,
            backend,
        }
    }

    pub fn build_request(&self, num_suggestions: u32) -> Result<ChatRequest> {
        let board = self.store.load()?;
        Ok(ChatRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_user_prompt(&board, num_suggestions)),
            ],
        })
    }

    /// Invocation failures propagate; an unusable reply becomes the fallback.
    pub async fn invoke(&self, num_suggestions: u32) -> Result<AgentResponse> {
        let request = self.build_request(num_suggestions)?;
        let content = self.backend.complete(&request).await?;

        match parse_agent_response(&content) {
            Ok(response) => Ok(response),
            Err(e) => {
                log::warn!("Model output rejected ({}); returning fallback", e);
                Ok(AgentResponse::fallback())
            }
        }
    }
}

#[async_trait]
impl MoveAdvisor for GameAgent {
    async fn suggest(&self, num_suggestions: u32) -> Result<AgentResponse> {
        self.invoke(num_suggestions).await
    }
}
