// Prompt templates for LLM interactions
//
// This module contains all prompt templates used by the agents. Each
// template embeds the literal JSON shape the completion must follow;
// enforcement of that shape happens in the extractor, not here.
// Prompts are versioned for reproducibility.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::types::{Context, ExplainRequest, ReviewRequest, SearchRequest, SuggestRequest};
use crate::domain::PromptPair;

/// Prompt template structure
pub struct PromptTemplate {
    pub name: &'static str,
    pub version: &'static str,
    pub system: &'static str,
    pub user_template: &'static str,
}

impl PromptTemplate {
    /// Render the user template with variables
    ///
    /// `{{name}}` placeholders are replaced in a single pass, so inserted
    /// values are never scanned for further placeholders. Unknown
    /// placeholders are kept verbatim.
    pub fn render(&self, variables: &HashMap<&str, String>) -> String {
        let mut out = String::with_capacity(self.user_template.len());
        let mut rest = self.user_template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];

            match after.find("}}") {
                Some(close) => {
                    let name = after[..close].trim();
                    match variables.get(name) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&rest[open..open + 2 + close + 2]),
                    }
                    rest = &after[close + 2..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Render into a complete prompt pair
    pub fn build(&self, variables: &HashMap<&str, String>) -> PromptPair {
        PromptPair {
            system: self.system.to_string(),
            user: self.render(variables),
        }
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn context_json(context: &Context) -> String {
    pretty(context)
}

pub fn search_prompt(request: &SearchRequest, snippets: &BTreeMap<&str, &str>) -> PromptPair {
    let variables = HashMap::from([
        ("query", request.query.clone()),
        ("snippets", pretty(snippets)),
        ("context", context_json(&request.context)),
    ]);

    library::code_search().build(&variables)
}

pub fn explain_prompt(request: &ExplainRequest) -> PromptPair {
    let variables = HashMap::from([
        ("code", request.code.clone()),
        ("language", request.language.clone().unwrap_or_default()),
        ("context", context_json(&request.context)),
    ]);

    library::code_explanation().build(&variables)
}

pub fn review_prompt(request: &ReviewRequest) -> PromptPair {
    let variables = HashMap::from([
        ("code", request.code.clone()),
        ("language", request.language.clone()),
        ("requirements", context_json(&request.requirements)),
    ]);

    library::code_review().build(&variables)
}

pub fn suggest_prompt(request: &SuggestRequest) -> PromptPair {
    let variables = HashMap::from([
        ("code", request.code.clone()),
        ("language", request.language.clone()),
        ("context", context_json(&request.context)),
    ]);

    library::improvement_suggestions().build(&variables)
}

pub mod library {
    use super::PromptTemplate;

    pub fn code_search() -> PromptTemplate {
        PromptTemplate {
            name: "code_search",
            version: "1.0.0",
            system: "You are a Code Search & Assistance Agent specializing in Zoho Creator's Deluge scripting language. \
                     Your task is to find and return relevant code snippets based on natural language queries. \
                     Always format your responses as valid JSON without trailing commas or syntax errors. \
                     Focus on providing accurate, relevant code examples with clear explanations.",
            user_template: r#"
Please search for code relevant to this query: "{{query}}"

Here are the code snippets I found that might be relevant:
{{snippets}}

Additional context:
{{context}}

Return your response as JSON with the following structure:
{
  "relevant_snippets": [
    {
      "filename": "filename.dg",
      "code": "code snippet",
      "relevance": "High/Medium/Low",
      "explanation": "Why this code is relevant to the query"
    }
  ],
  "summary": "A brief summary of the search results",
  "suggestions": ["Suggestion 1", "Suggestion 2"]
}"#,
        }
    }

    pub fn code_explanation() -> PromptTemplate {
        PromptTemplate {
            name: "code_explanation",
            version: "1.0.0",
            system: "You are a Code Explanation Agent specializing in Zoho Creator's Deluge scripting language. \
                     Your task is to explain code snippets in clear, concise language that non-technical users can understand. \
                     Always format your responses as valid JSON without trailing commas or syntax errors. \
                     Focus on explaining what the code does, not just how it works.",
            user_template: r#"
Please explain this code snippet in simple terms:

```{{language}}
{{code}}
```

Additional context:
{{context}}

Return your explanation as JSON with the following structure:
{
  "summary": "One-sentence summary of what the code does",
  "detailed_explanation": "Step-by-step explanation of the code",
  "key_components": [
    {
      "component": "Component name or line reference",
      "purpose": "What this component does"
    }
  ],
  "potential_issues": ["Issue 1", "Issue 2"],
  "improvement_suggestions": ["Suggestion 1", "Suggestion 2"]
}"#,
        }
    }

    pub fn code_review() -> PromptTemplate {
        PromptTemplate {
            name: "code_review",
            version: "1.0.0",
            system: "You are a Code Review Agent. \
                     Your task is to review code for correctness, readability, security and maintainability. \
                     Always format your responses as valid JSON without trailing commas or syntax errors. \
                     Be specific: point at the code you are talking about.",
            user_template: r#"
Please review this {{language}} code:

```{{language}}
{{code}}
```

Review requirements:
{{requirements}}

Return your review as JSON with the following structure:
{
  "summary": "Overall assessment in one or two sentences",
  "overall_quality": "Excellent/Good/Fair/Poor",
  "issues": [
    {
      "severity": "High/Medium/Low",
      "location": "Function name or line reference",
      "description": "What is wrong",
      "recommendation": "How to fix it"
    }
  ],
  "strengths": ["Strength 1", "Strength 2"],
  "best_practices": ["Practice 1", "Practice 2"]
}"#,
        }
    }

    pub fn improvement_suggestions() -> PromptTemplate {
        PromptTemplate {
            name: "improvement_suggestions",
            version: "1.0.0",
            system: "You are a Code Improvement Agent. \
                     Your task is to propose concrete, minimal changes that make code more robust, readable and efficient. \
                     Always format your responses as valid JSON without trailing commas or syntax errors. \
                     Every suggestion must include the code before and after the change.",
            user_template: r#"
Please suggest improvements for this {{language}} code:

```{{language}}
{{code}}
```

Additional context:
{{context}}

Return your suggestions as JSON with the following structure:
{
  "summary": "Short description of the most important improvements",
  "improvements": [
    {
      "category": "Error handling/Performance/Readability/Security",
      "description": "What to change and why",
      "original_code": "The code as it is now",
      "improved_code": "The code after the change",
      "impact": "High/Medium/Low"
    }
  ],
  "refactored_code": "The complete improved version of the code"
}"#,
        }
    }
}
