use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::agents::errors::{AgentError, AgentResult};
use crate::domain::{Completion, CompletionClient, CompletionOptions, PromptPair};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic Messages API implementation of CompletionClient
///
/// One `POST /v1/messages` per call. No retries or streaming, and no timeout
/// beyond what the transport applies.
pub struct AnthropicClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AnthropicClient {
    /// Creates a client for the public Anthropic endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Points the client at another host (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: [TextBlock<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextBlock<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

impl<'a> MessagesRequest<'a> {
    fn new(prompt: &'a PromptPair, options: &'a CompletionOptions) -> Self {
        Self {
            model: &options.model,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            system: &prompt.system,
            messages: [UserMessage {
                role: "user",
                content: [TextBlock {
                    kind: "text",
                    text: &prompt.user,
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Builds a Completion from a 2xx body
///
/// Bodies that are not Messages responses produce a completion without text,
/// which the extractor turns into a fallback.
fn completion_from_body(status: u16, body: &str) -> Completion {
    match serde_json::from_str::<MessagesResponse>(body) {
        Ok(response) => Completion {
            text: response.content.into_iter().next().and_then(|block| block.text),
            status,
            model: response.model,
            stop_reason: response.stop_reason,
        },
        Err(e) => {
            tracing::warn!(status, error = %e, "LLM API returned an unrecognised body");
            Completion {
                status,
                ..Default::default()
            }
        }
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(
        &self,
        prompt: &PromptPair,
        options: &CompletionOptions,
    ) -> AgentResult<Completion> {
        let url = self.messages_url();
        tracing::debug!(url = %url, model = %options.model, "Making API request to Claude");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&MessagesRequest::new(prompt, options))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "LLM API request failed");
                AgentError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "LLM API error");
            return Err(AgentError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(status = status.as_u16(), "Received response from Claude API");
        Ok(completion_from_body(status.as_u16(), &body))
    }
}
