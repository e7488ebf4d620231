use uuid::Uuid;

use super::errors::AgentResult;
use super::pipeline::Pipeline;
use super::prompts;
use super::types::{ReviewRequest, ReviewResult, SuggestRequest, SuggestResult};

/// Code Review agent: reviews snippets and proposes improvements
#[derive(Clone)]
pub struct CodeReviewAgent {
    pipeline: Pipeline,
}

impl CodeReviewAgent {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    #[tracing::instrument(name = "code_review", skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn review_code(&self, request: &ReviewRequest) -> AgentResult<ReviewResult> {
        tracing::info!(
            language = %request.language,
            code_chars = request.code.len(),
            requirements = request.requirements.len(),
            "Reviewing code"
        );

        let prompt = prompts::review_prompt(request);
        let extraction = self.pipeline.execute::<ReviewResult>(&prompt).await?;

        Ok(extraction.into_inner())
    }

    #[tracing::instrument(name = "suggest_improvements", skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn suggest_improvements(
        &self,
        request: &SuggestRequest,
    ) -> AgentResult<SuggestResult> {
        tracing::info!(
            language = %request.language,
            code_chars = request.code.len(),
            "Suggesting improvements"
        );

        let prompt = prompts::suggest_prompt(request);
        let extraction = self.pipeline.execute::<SuggestResult>(&prompt).await?;

        Ok(extraction.into_inner())
    }
}
