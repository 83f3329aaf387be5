use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wanderai::config::WanderAiConfig;
use wanderai::search::{SearchService, build_provider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WanderAiConfig::load().context("Failed to load configuration")?;
    init_logging(&config);

    let provider = build_provider(&config.provider)?;
    match &provider {
        Some(provider) => tracing::info!("Using image provider: {}", provider.name()),
        None => tracing::info!("No image provider configured; serving synthesized results"),
    }

    let service = Arc::new(SearchService::new(provider, &config.search));

    // One-shot mode: `wanderai <query>` resolves a single search and exits
    if let Some(query) = std::env::args().nth(1) {
        run_query(&service, &query).await;
        return Ok(());
    }

    wanderai::web::run(&config.server, service).await
}

fn init_logging(config: &WanderAiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run_query(service: &SearchService, query: &str) {
    let response = service.search(query).await;

    println!(
        "Found {} places for \"{}\" (corrected to \"{}\"):",
        response.places.len(),
        response.query,
        response.canonical_query
    );
    for place in &response.places {
        println!(
            "  - {} ({}) [{}] - {} images, best time: {}",
            place.name,
            place.country,
            place.category,
            place.images.len(),
            place.best_time_to_visit
        );
    }
}
