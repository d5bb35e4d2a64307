pub mod error;
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use state::{AppConfig, SharedState};
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/tweets", get(handlers::get_tweets))
        .layer(TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}

/// Builds the one HTTP client shared by every request.
pub fn build_http_client(config: &AppConfig) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("tweet-relay/", env!("CARGO_PKG_VERSION")))
        .timeout(config.upstream_timeout)
        .build()?;

    Ok(client)
}
