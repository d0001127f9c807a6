//! Structured suggestion payloads and validation of raw model output.

use serde::{Deserialize, Serialize};

use crate::game::Direction;

pub const FALLBACK_REASONING: &str = "Default recommendation due to parsing error";
pub const FALLBACK_ANALYSIS: &str = "Unable to analyze";

/// One recommended move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub direction: Direction,
    pub reasoning: String,
    /// Between 0 and 1 inclusive.
    pub confidence: f64,
}

/// Recommendations ordered by preference plus an overall assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub recommended_moves: Vec<Move>,
    pub game_analysis: String,
}

impl AgentResponse {
    /// Fixed answer used when the model output cannot be validated.
    pub fn fallback() -> Self {
        Self {
            recommended_moves: vec![Move {
                direction: Direction::Up,
                reasoning: FALLBACK_REASONING.to_string(),
                confidence: 0.0,
            }],
            game_analysis: FALLBACK_ANALYSIS.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("confidence {0} outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}

/// Pulls the JSON payload out of a reply, unwrapping a Markdown code fence if
/// there is one.
fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };
    let after_fence = &trimmed[start + 3..];
    // skip the info string ("json") up to the end of the fence line
    let body = match after_fence.find('\n') {
        Some(newline) => &after_fence[newline + 1..],
        None => after_fence,
    };
    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

pub fn parse_agent_response(content: &str) -> Result<AgentResponse, ParseError> {
    let response: AgentResponse = serde_json::from_str(extract_json(content))?;
    if let Some(bad) = response
        .recommended_moves
        .iter()
        .find(|mv| !(0.0..=1.0).contains(&mv.confidence))
    {
        return Err(ParseError::ConfidenceOutOfRange(bad.confidence));
    }
    Ok(response)
}
