use async_trait::async_trait;

use crate::agents::errors::AgentResult;

pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// System and user prompt sent as a single completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Per-call sampling parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Raw result of one completion round trip
///
/// `text` is the first content block's text. It is `None` when the provider
/// answered successfully but the body carried no text segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub text: Option<String>,
    pub status: u16,
    pub model: Option<String>,
    pub stop_reason: Option<String>,
}

impl Completion {
    /// A successful completion carrying `text`
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            status: 200,
            ..Default::default()
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Port to the hosted LLM
///
/// Implementations send exactly one request per call. They do not retry,
/// stream or back off; transport and non-success statuses surface as
/// `AgentError::Transport` / `AgentError::Upstream`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &PromptPair,
        options: &CompletionOptions,
    ) -> AgentResult<Completion>;
}
