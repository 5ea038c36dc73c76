use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use footle_persistence::{
    SnapshotStore, connection::connect_and_migrate, repositories::SnapshotRepository,
};
use footle_server::{config::Config, gateway::GraphqlGateway, roster_builder::RosterBuilder};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.api_key.is_empty() {
        tracing::warn!("SORARE_API_KEY is not set, the crawl may be rate limited");
    }

    let gateway = match GraphqlGateway::new(
        config.api_url.clone(),
        config.api_key.clone(),
        Duration::from_secs(config.request_timeout_seconds),
    ) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            tracing::error!("Failed to create the remote API client: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Building a roster of {} players from {} ({} concurrent requests)",
        config.roster_size, config.api_url, config.max_concurrent_requests
    );
    let started = Instant::now();

    let builder = RosterBuilder::new(gateway, config.max_concurrent_requests);
    let roster = match builder.build(config.roster_size).await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Roster build failed: {}", e);
            std::process::exit(1);
        }
    };

    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };
    let store = SnapshotRepository::new(db);

    if let Err(e) = store.save(&config.snapshot_name, &roster).await {
        tracing::error!("Failed to save snapshot '{}': {:#}", config.snapshot_name, e);
        std::process::exit(1);
    }

    info!(
        "Saved roster '{}' with {} players in {:.1}s",
        config.snapshot_name,
        roster.len(),
        started.elapsed().as_secs_f64()
    );
}
