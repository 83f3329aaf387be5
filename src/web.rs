//! HTTP server bootstrap

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api;
use crate::config::ServerConfig;
use crate::search::SearchService;

pub async fn run(config: &ServerConfig, service: Arc<SearchService>) -> anyhow::Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router(service))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(60)));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Search API running at http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
