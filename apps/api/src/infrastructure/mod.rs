// Infrastructure layer module
// Contains adapters for external services
// Follows Hexagonal Architecture

pub mod anthropic;

pub use anthropic::AnthropicClient;
