use serde::Deserialize;
use std::sync::Arc;
use warp::Filter;
use warp::http::StatusCode;

use crate::daily_game::DailyGame;
use crate::render::{
    UNAVAILABLE_FRAGMENT, render_found_count, render_outcome, render_roster_options,
};
use crate::resolver::PlayerDetailResolver;
use footle_core::Comparator;

#[derive(Deserialize)]
struct GuessQuery {
    #[serde(default)]
    player: String,
    #[serde(default)]
    trys: String,
}

pub mod config;
pub mod daily_game;
pub mod gateway;
pub mod render;
pub mod resolver;
pub mod roster_builder;

pub fn create_routes(
    daily_game: Arc<DailyGame>,
    resolver: Arc<PlayerDetailResolver>,
    comparator: Arc<Comparator>,
    index_html_path: String,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let daily_game_filter = warp::any().map({
        let daily_game = daily_game.clone();
        move || daily_game.clone()
    });

    let resolver_filter = warp::any().map({
        let resolver = resolver.clone();
        move || resolver.clone()
    });

    let comparator_filter = warp::any().map({
        let comparator = comparator.clone();
        move || comparator.clone()
    });

    let index_path_filter = warp::any().map(move || index_html_path.clone());

    // Game page
    let index = warp::path::end()
        .and(warp::get())
        .and(index_path_filter)
        .and(daily_game_filter.clone())
        .and_then(handle_index_request);

    // Guess submission
    let player = warp::path!("player")
        .and(warp::get())
        .and(warp::query::<GuessQuery>())
        .and(daily_game_filter.clone())
        .and(resolver_filter)
        .and(comparator_filter)
        .and_then(handle_guess_request);

    // The roster never changes while the server runs
    let roster_options = render_roster_options(daily_game.roster());
    let all_players = warp::path!("all-players")
        .and(warp::get())
        .map(move || warp::reply::html(roster_options.clone()));

    let found_count = warp::path!("nb-players")
        .and(warp::get())
        .and(daily_game_filter)
        .and_then(handle_found_count_request);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET"]);

    index
        .or(player)
        .or(all_players)
        .or(found_count)
        .or(health)
        .with(cors)
        .with(warp::log("footle"))
}

async fn handle_index_request(
    index_html_path: String,
    daily_game: Arc<DailyGame>,
) -> Result<impl warp::Reply, warp::Rejection> {
    daily_game.current_secret(&chrono::Utc::now()).await;

    match tokio::fs::read_to_string(&index_html_path).await {
        Ok(page) => Ok(warp::reply::with_status(
            warp::reply::html(page),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to read index page '{}': {}", index_html_path, err);
            Ok(warp::reply::with_status(
                warp::reply::html("Internal server error".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn handle_guess_request(
    query: GuessQuery,
    daily_game: Arc<DailyGame>,
    resolver: Arc<PlayerDetailResolver>,
    comparator: Arc<Comparator>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // A malformed attempt count only affects the banner
    let attempt_count = query.trys.trim().parse::<u32>().unwrap_or(0);

    let secret = daily_game.current_secret(&chrono::Utc::now()).await;
    let resolved = resolver
        .resolve_two(&secret.candidate.identifier, query.player.trim())
        .await;

    let Some(secret_detail) = resolved.secret else {
        tracing::error!(
            "Could not resolve today's player '{}'",
            secret.candidate.identifier
        );
        return Ok(warp::reply::with_status(
            warp::reply::html(UNAVAILABLE_FRAGMENT.to_string()),
            StatusCode::SERVICE_UNAVAILABLE,
        ));
    };

    let outcome = comparator.compare(&secret_detail, resolved.guess.as_ref(), attempt_count);
    if outcome.is_win() {
        daily_game
            .record_win(secret.day_number, &chrono::Utc::now())
            .await;
    }

    Ok(warp::reply::with_status(
        warp::reply::html(render_outcome(&outcome)),
        StatusCode::OK,
    ))
}

async fn handle_found_count_request(
    daily_game: Arc<DailyGame>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let found = daily_game.found_today(&chrono::Utc::now()).await;
    Ok(warp::reply::html(render_found_count(found)))
}
