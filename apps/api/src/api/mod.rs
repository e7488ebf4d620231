// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{code_review, code_search, health};
pub use state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Code search routes
        .route("/api/code-search/search", post(code_search::search))
        .route("/api/code-search/explain", post(code_search::explain))
        // Code review routes
        .route("/api/code-review/review", post(code_review::review))
        .route(
            "/api/code-review/suggest-improvements",
            post(code_review::suggest_improvements),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
