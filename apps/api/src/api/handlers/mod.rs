pub mod code_review;
pub mod code_search;
pub mod health;

use super::errors::ApiError;

/// Returns the field value, or a 400 with `message` when it is absent or empty
pub(crate) fn required(value: Option<String>, message: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(message))
}
