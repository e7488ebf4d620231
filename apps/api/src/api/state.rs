use std::sync::Arc;

use crate::agents::{CodeReviewAgent, CodeSearchAgent, Pipeline};
use crate::domain::{CompletionClient, CompletionOptions, Corpus};

/// Shared, read-only application state
///
/// Built once at startup. Cloning is cheap: the corpus and client sit behind
/// `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub search_agent: CodeSearchAgent,
    pub review_agent: CodeReviewAgent,
}

impl AppState {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        corpus: Arc<Corpus>,
        options: CompletionOptions,
    ) -> Self {
        let pipeline = Pipeline::new(client, options);

        Self {
            search_agent: CodeSearchAgent::new(pipeline.clone(), corpus),
            review_agent: CodeReviewAgent::new(pipeline),
        }
    }
}
