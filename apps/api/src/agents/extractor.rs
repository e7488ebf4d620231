// Structured-output extraction
//
// Decodes the JSON an LLM was asked to produce out of its free-text reply.
// Extraction never fails: anything that does not decode into the requested
// schema is replaced by that schema's canned fallback.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::SchemaKind;

/// A result schema an agent can ask the LLM for
///
/// Decoding into the implementing type is the schema validation step: every
/// field is required and typed.
pub trait StructuredResult: DeserializeOwned + Serialize + Send + Sync + 'static {
    const KIND: SchemaKind;

    /// Canned, schema-conformant payload used when extraction fails
    fn fallback() -> Self;
}

/// Outcome of an extraction
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    /// Decoded from the completion text
    Parsed(T),
    /// Canned payload substituted for an unusable completion
    Fallback(T),
}

impl<T> Extraction<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Extraction::Parsed(value) | Extraction::Fallback(value) => value,
        }
    }
}

/// Why a completion was replaced by a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
enum ExtractionFailure {
    NoText,
    NoJsonSpan,
    Invalid(String),
}

impl std::fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionFailure::NoText => write!(f, "completion carried no text"),
            ExtractionFailure::NoJsonSpan => write!(f, "no JSON found in completion"),
            ExtractionFailure::Invalid(e) => write!(f, "completion JSON did not match schema: {}", e),
        }
    }
}

const PREVIEW_CHARS: usize = 200;

/// Extracts a `T` from completion text, falling back to `T::fallback()`
pub fn extract<T: StructuredResult>(text: Option<&str>) -> Extraction<T> {
    match try_extract::<T>(text) {
        Ok(value) => Extraction::Parsed(value),
        Err(failure) => {
            tracing::warn!(
                kind = %T::KIND,
                reason = %failure,
                preview = %preview(text.unwrap_or_default()),
                "Falling back to canned result"
            );
            Extraction::Fallback(T::fallback())
        }
    }
}

fn try_extract<T: StructuredResult>(text: Option<&str>) -> Result<T, ExtractionFailure> {
    let text = text
        .filter(|t| !t.trim().is_empty())
        .ok_or(ExtractionFailure::NoText)?;

    let span = find_json_span(text).ok_or(ExtractionFailure::NoJsonSpan)?;

    serde_json::from_str(span).map_err(|e| ExtractionFailure::Invalid(e.to_string()))
}

fn fenced_json() -> &'static Regex {
    static FENCED: OnceLock<Regex> = OnceLock::new();
    FENCED.get_or_init(|| {
        Regex::new(r"```json[ \t]*\r?\n([\s\S]*?)\r?\n[ \t]*```").expect("valid fenced-json regex")
    })
}

/// Locates the JSON text inside a completion
///
/// A fenced block tagged `json` takes precedence. Otherwise the first
/// balanced `{ ... }` span is used.
pub fn find_json_span(text: &str) -> Option<&str> {
    if let Some(captures) = fenced_json().captures(text) {
        return captures.get(1).map(|m| m.as_str());
    }

    first_object_span(text)
}

/// First balanced brace-delimited span, skipping braces inside string
/// literals. Returns `None` when the span never closes.
fn first_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}
