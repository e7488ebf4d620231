use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use super::required;
use crate::agents::types::{Context, ExplainRequest, ExplainResult, SearchRequest, SearchResult};
use crate::api::errors::ApiError;
use crate::api::state::AppState;

/// Request body for a code search
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub query: Option<String>,
    pub context: Option<Context>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: SearchResult,
}

/// Request body for a code explanation
#[derive(Debug, Deserialize)]
pub struct ExplainBody {
    pub code: Option<String>,
    pub language: Option<String>,
    pub context: Option<Context>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: ExplainResult,
}

/// Search the reference corpus with a natural-language query
///
/// POST /api/code-search/search
pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(body) = body?;
    let request = SearchRequest {
        query: required(body.query, "Search query is required")?,
        context: body.context.unwrap_or_default(),
    };

    let results = state.search_agent.search_code(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Error in code search route");
        ApiError::internal_server_error("Failed to search code")
    })?;

    Ok(Json(SearchResponse { results }))
}

/// Explain a code snippet in plain language
///
/// POST /api/code-search/explain
pub async fn explain(
    State(state): State<AppState>,
    body: Result<Json<ExplainBody>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let Json(body) = body?;
    let request = ExplainRequest {
        code: required(body.code, "Code snippet is required")?,
        language: body.language.filter(|l| !l.is_empty()),
        context: body.context.unwrap_or_default(),
    };

    let explanation = state.search_agent.explain_code(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Error in code explanation route");
        ApiError::internal_server_error("Failed to explain code")
    })?;

    Ok(Json(ExplainResponse { explanation }))
}
