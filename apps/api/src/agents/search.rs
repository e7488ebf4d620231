use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Corpus;

use super::errors::AgentResult;
use super::pipeline::Pipeline;
use super::prompts;
use super::types::{ExplainRequest, ExplainResult, SearchRequest, SearchResult};

/// Code Search & Assistance agent
///
/// Answers natural-language code searches against the reference corpus and
/// explains snippets in plain language.
#[derive(Clone)]
pub struct CodeSearchAgent {
    pipeline: Pipeline,
    corpus: Arc<Corpus>,
}

impl CodeSearchAgent {
    pub fn new(pipeline: Pipeline, corpus: Arc<Corpus>) -> Self {
        Self { pipeline, corpus }
    }

    /// Find corpus snippets relevant to a natural-language query
    #[tracing::instrument(name = "code_search", skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn search_code(&self, request: &SearchRequest) -> AgentResult<SearchResult> {
        tracing::info!(query = %request.query, "Searching code");

        let snippets = self.corpus.search(&request.query);
        tracing::debug!(matches = snippets.len(), "Corpus lookup complete");

        let prompt = prompts::search_prompt(request, &snippets);
        let extraction = self.pipeline.execute::<SearchResult>(&prompt).await?;

        Ok(extraction.into_inner())
    }

    /// Explain a snippet for a non-technical reader
    #[tracing::instrument(name = "code_explain", skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn explain_code(&self, request: &ExplainRequest) -> AgentResult<ExplainResult> {
        tracing::info!(
            code_chars = request.code.len(),
            language = request.language.as_deref().unwrap_or("unspecified"),
            "Explaining code snippet"
        );

        let prompt = prompts::explain_prompt(request);
        let extraction = self.pipeline.execute::<ExplainResult>(&prompt).await?;

        Ok(extraction.into_inner())
    }
}
