use std::path::PathBuf;

use crate::agents::errors::{AgentError, AgentResult};
use crate::domain::CompletionOptions;
use crate::infrastructure::anthropic::DEFAULT_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub completion: CompletionOptions,
    pub corpus_dir: Option<PathBuf>,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> AgentResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration from an arbitrary key lookup
    ///
    /// # Variables
    /// * `ANTHROPIC_API_KEY` - required
    /// * `ANTHROPIC_BASE_URL`, `ANTHROPIC_MODEL`, `ANTHROPIC_MAX_TOKENS`,
    ///   `ANTHROPIC_TEMPERATURE`, `CORPUS_DIR`, `PORT` - optional
    pub fn from_lookup<F>(lookup: F) -> AgentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("ANTHROPIC_API_KEY")
            .ok_or_else(|| AgentError::ConfigError("ANTHROPIC_API_KEY is not set".to_string()))?;

        let defaults = CompletionOptions::default();
        let completion = CompletionOptions {
            model: get("ANTHROPIC_MODEL").unwrap_or(defaults.model),
            max_tokens: parse(&get, "ANTHROPIC_MAX_TOKENS")?.unwrap_or(defaults.max_tokens),
            temperature: parse(&get, "ANTHROPIC_TEMPERATURE")?.unwrap_or(defaults.temperature),
        };

        Ok(Self {
            api_key,
            base_url: get("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            completion,
            corpus_dir: get("CORPUS_DIR").map(PathBuf::from),
            port: parse(&get, "PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }
}

fn parse<T, G>(get: &G, key: &str) -> AgentResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AgentError::ConfigError(format!("Invalid {}: {} ({})", key, raw, e)))
        })
        .transpose()
}
