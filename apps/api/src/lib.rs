//! Code Agent API Library
//!
//! This library provides the agent pipeline behind the code search and code
//! review endpoints: prompt construction, LLM invocation, structured-output
//! extraction and deterministic fallback.

pub mod agents;
pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
