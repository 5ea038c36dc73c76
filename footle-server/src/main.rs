use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

use footle_core::{Comparator, DailySelector};
use footle_persistence::{connection::connect_and_migrate, repositories::SnapshotRepository};
use footle_server::{
    config::Config,
    create_routes,
    daily_game::{StartupError, load_daily_game},
    gateway::GraphqlGateway,
    resolver::PlayerDetailResolver,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Footle server...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };
    let snapshot_repository = SnapshotRepository::new(db);

    let daily_game = match load_daily_game(
        &snapshot_repository,
        &config.snapshot_name,
        DailySelector::default(),
        &chrono::Utc::now(),
    )
    .await
    {
        Ok(game) => Arc::new(game),
        Err(StartupError::SnapshotMissing { name }) => {
            tracing::error!("No roster snapshot named '{}' in the database.", name);
            tracing::error!("Run the 'build-roster' binary first to crawl and store a roster.");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Failed to set up the daily game: {}", e);
            std::process::exit(1);
        }
    };

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
    if config.api_key.is_empty() {
        tracing::warn!("SORARE_API_KEY is not set, remote requests may be rate limited");
    }

    let resolver = Arc::new(PlayerDetailResolver::new(
        gateway,
        Duration::from_secs(config.join_timeout_seconds),
    ));
    let comparator = Arc::new(Comparator::new(config.comparator_config()));
    info!("Comparing guesses with {:?}", config.comparator_config());

    let routes = create_routes(
        daily_game,
        resolver,
        comparator,
        config.index_html_path.clone(),
    );

    info!("Server starting on {}:{}", config.host, config.port);

    let ip = match config.host.parse::<std::net::IpAddr>() {
        Ok(ip) => ip,
        Err(e) => {
            tracing::error!("Invalid HOST '{}': {}", config.host, e);
            std::process::exit(1);
        }
    };

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown((ip, config.port), async {
        shutdown_signal().await;
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}

async fn shutdown_signal() {
    // Wait for SIGINT (Ctrl+C) or SIGTERM
    #[cfg(unix)]
    {
        let (Ok(mut sigint), Ok(mut sigterm)) = (
            signal::unix::signal(signal::unix::SignalKind::interrupt()),
            signal::unix::signal(signal::unix::SignalKind::terminate()),
        ) else {
            tracing::error!("Failed to install signal handlers, falling back to Ctrl+C");
            let _ = signal::ctrl_c().await;
            return;
        };

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", e);
            return;
        }
        info!("Received Ctrl+C, shutting down gracefully...");
    }
}
