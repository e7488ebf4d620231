use thiserror::Error;

/// Errors that can occur in the agent pipeline
///
/// Extraction failures are deliberately absent: they are absorbed by the
/// fallback registry and never reach a caller.
#[derive(Debug, Clone, Error)]
pub enum AgentError {
    #[error("LLM API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("LLM API transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AgentError {
    /// Upstream HTTP status, when the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AgentError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::Transport(err.to_string())
    }
}

pub type AgentResult<T> = Result<T, AgentError>;
