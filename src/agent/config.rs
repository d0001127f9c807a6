use crate::{GameError, Result};

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Model selection for suggestions
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub model: String,
    pub temperature: f64,
}

impl AgentConfig {
    /// Temperature must lie in `[0, 2]`.
    pub fn new(model: impl Into<String>, temperature: f64) -> Result<Self> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(GameError::Config(format!(
                "temperature {} outside [0, 2]",
                temperature
            )));
        }
        Ok(Self {
            model: model.into(),
            temperature,
        })
    }

    pub fn from_env() -> Result<Self> {
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let temperature = match std::env::var("MODEL_TEMPERATURE") {
            Ok(raw) => raw.trim().parse::<f64>().map_err(|e| {
                GameError::Config(format!("MODEL_TEMPERATURE '{}' is not a number: {}", raw, e))
            })?,
            Err(_) => DEFAULT_TEMPERATURE,
        };
        Self::new(model, temperature)
    }
}
