use std::sync::Arc;

use crate::domain::{CompletionClient, CompletionOptions, PromptPair};

use super::errors::AgentResult;
use super::extractor::{extract, Extraction, StructuredResult};

/// The completion half of every agent: one LLM call followed by extraction
#[derive(Clone)]
pub struct Pipeline {
    client: Arc<dyn CompletionClient>,
    options: CompletionOptions,
}

impl Pipeline {
    pub fn new(client: Arc<dyn CompletionClient>, options: CompletionOptions) -> Self {
        Self { client, options }
    }

    /// Sends `prompt` and decodes the reply as `T`
    ///
    /// Upstream failures are returned as errors. Undecodable replies are not:
    /// they come back as `Extraction::Fallback`.
    pub async fn execute<T: StructuredResult>(
        &self,
        prompt: &PromptPair,
    ) -> AgentResult<Extraction<T>> {
        tracing::debug!(
            kind = %T::KIND,
            model = %self.options.model,
            prompt_chars = prompt.user.len(),
            "Requesting completion"
        );

        let completion = self.client.complete(prompt, &self.options).await?;

        tracing::debug!(
            status = completion.status,
            stop_reason = completion.stop_reason.as_deref().unwrap_or("none"),
            "Parsing completion"
        );

        let extraction = extract::<T>(completion.text());
        if !extraction.is_fallback() {
            tracing::info!(kind = %T::KIND, "Extracted structured result");
        }

        Ok(extraction)
    }
}
