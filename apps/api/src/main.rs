use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use codeagent_api::api::{self, AppState};
use codeagent_api::config::Config;
use codeagent_api::domain::Corpus;
use codeagent_api::infrastructure::AnthropicClient;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    // Load reference corpus
    let corpus = match &config.corpus_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Loading corpus from directory");
            Corpus::from_dir(dir).expect("Failed to read corpus directory")
        }
        None => {
            tracing::warn!("CORPUS_DIR not set, using built-in samples");
            Corpus::builtin()
        }
    };
    tracing::info!(entries = corpus.len(), "Corpus loaded");

    let client = AnthropicClient::new(config.api_key.clone()).with_base_url(&config.base_url);
    tracing::info!(model = %config.completion.model, base_url = %config.base_url, "Completion client configured");

    let state = AppState::new(Arc::new(client), Arc::new(corpus), config.completion.clone());

    // Build router
    let app = api::router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
