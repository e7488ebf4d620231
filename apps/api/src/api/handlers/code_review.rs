use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use super::required;
use crate::agents::types::{Context, ReviewRequest, ReviewResult, SuggestRequest, SuggestResult};
use crate::api::errors::ApiError;
use crate::api::state::AppState;

/// Request body for a code review
#[derive(Debug, Deserialize)]
pub struct ReviewBody {
    pub code: Option<String>,
    pub language: Option<String>,
    pub requirements: Option<Context>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: ReviewResult,
}

/// Request body for improvement suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestBody {
    pub code: Option<String>,
    pub language: Option<String>,
    pub context: Option<Context>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: SuggestResult,
}

/// Review a code snippet
///
/// POST /api/code-review/review
pub async fn review(
    State(state): State<AppState>,
    body: Result<Json<ReviewBody>, JsonRejection>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let Json(body) = body?;
    let request = ReviewRequest {
        code: required(body.code, "Code snippet is required")?,
        language: required(body.language, "Programming language is required")?,
        requirements: body.requirements.unwrap_or_default(),
    };

    let review = state.review_agent.review_code(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Error in code review route");
        ApiError::internal_server_error("Failed to review code")
    })?;

    Ok(Json(ReviewResponse { review }))
}

/// Suggest improvements for a code snippet
///
/// POST /api/code-review/suggest-improvements
pub async fn suggest_improvements(
    State(state): State<AppState>,
    body: Result<Json<SuggestBody>, JsonRejection>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let Json(body) = body?;
    let request = SuggestRequest {
        code: required(body.code, "Code snippet is required")?,
        language: required(body.language, "Programming language is required")?,
        context: body.context.unwrap_or_default(),
    };

    let suggestions = state
        .review_agent
        .suggest_improvements(&request)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error in improvement suggestions route");
            ApiError::internal_server_error("Failed to suggest improvements")
        })?;

    Ok(Json(SuggestResponse { suggestions }))
}
