// Agent system modules
//
// Each agent turns a natural-language task into one LLM completion and
// decodes the reply into a typed, schema-conformant result.

pub mod errors;
pub mod extractor;
pub mod fallback;
pub mod pipeline;
pub mod prompts;
pub mod review;
pub mod search;
pub mod types;

// Re-export main types
pub use errors::{AgentError, AgentResult};
pub use extractor::{extract, Extraction, StructuredResult};
pub use pipeline::Pipeline;
pub use review::CodeReviewAgent;
pub use search::CodeSearchAgent;
pub use types::SchemaKind;
