// Domain layer module exports
// Following Hexagonal Architecture: the corpus and the completion port are
// independent of the HTTP and provider adapters

pub mod completion;
pub mod corpus;

pub use completion::{Completion, CompletionClient, CompletionOptions, PromptPair};
pub use corpus::{Corpus, CorpusEntry};
