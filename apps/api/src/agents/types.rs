use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied free-form context
pub type Context = Map<String, Value>;

/// Task families served by the agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Search,
    Explain,
    Review,
    Suggest,
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Search => write!(f, "search"),
            SchemaKind::Explain => write!(f, "explain"),
            SchemaKind::Review => write!(f, "review"),
            SchemaKind::Suggest => write!(f, "suggest"),
        }
    }
}

// Requests

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub context: Context,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplainRequest {
    pub code: String,
    pub language: Option<String>,
    pub context: Context,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewRequest {
    pub code: String,
    pub language: String,
    pub requirements: Context,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestRequest {
    pub code: String,
    pub language: String,
    pub context: Context,
}

// Results

/// Three-level rating used for snippet relevance, issue severity and impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevantSnippet {
    pub filename: String,
    pub code: String,
    pub relevance: Level,
    pub explanation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a natural-language code search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub relevant_snippets: Vec<RelevantSnippet>,
    pub summary: String,
    pub suggestions: Vec<String>,
    /// Keys the schema does not declare, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyComponent {
    pub component: String,
    pub purpose: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Plain-language explanation of a snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainResult {
    pub summary: String,
    pub detailed_explanation: String,
    pub key_components: Vec<KeyComponent>,
    pub potential_issues: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    /// Keys the schema does not declare, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewIssue {
    pub severity: Level,
    pub location: String,
    pub description: String,
    pub recommendation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Code review findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub summary: String,
    pub overall_quality: Quality,
    pub issues: Vec<ReviewIssue>,
    pub strengths: Vec<String>,
    pub best_practices: Vec<String>,
    /// Keys the schema does not declare, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    pub description: String,
    pub original_code: String,
    pub improved_code: String,
    pub impact: Level,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Concrete improvement proposals for a snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResult {
    pub summary: String,
    pub improvements: Vec<Improvement>,
    pub refactored_code: String,
    /// Keys the schema does not declare, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
