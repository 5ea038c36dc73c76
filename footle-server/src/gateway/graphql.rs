use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::{GatewayError, PlayerGateway};
use footle_types::{CandidateSummary, ClubId, LeagueId, Position, SubjectAttributes};

const DOMESTIC_LEAGUE_FORMAT: &str = "DOMESTIC_LEAGUE";

const LEAGUES_QUERY: &str = r#"
query {
    football {
        leaguesOpenForGameStats {
            slug
            format
        }
    }
}
"#;

const COMPETITION_CLUBS_QUERY: &str = r#"
query($slug: String!) {
    football {
        competition(slug: $slug) {
            clubs {
                nodes {
                    slug
                }
            }
        }
    }
}
"#;

const CLUB_PLAYERS_QUERY: &str = r#"
query($slug: String!) {
    football {
        club(slug: $slug) {
            activePlayers {
                nodes {
                    slug
                    subscriptionsCount
                    displayName
                    cardSupply {
                        limited
                    }
                }
            }
        }
    }
}
"#;

const PLAYER_DETAIL_QUERY: &str = r#"
query($slug: String!) {
    football {
        player(slug: $slug) {
            age
            position
            shirtNumber
            pictureUrl
            displayName
            l5: averageScore(type: LAST_FIVE_SO5_AVERAGE_SCORE)
            l15: averageScore(type: LAST_FIFTEEN_SO5_AVERAGE_SCORE)
            activeClub {
                slug
                pictureUrl
                domesticLeague {
                    slug
                }
            }
            country {
                flagUrl
                code
            }
        }
    }
}
"#;

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct FootballData<T> {
    football: T,
}

#[derive(Debug, Deserialize)]
struct LeaguesRoot {
    #[serde(rename = "leaguesOpenForGameStats", default)]
    leagues: Vec<LeagueNode>,
}

#[derive(Debug, Deserialize)]
struct LeagueNode {
    slug: String,
    format: String,
}

#[derive(Debug, Deserialize)]
struct CompetitionRoot {
    competition: Option<CompetitionNode>,
}

#[derive(Debug, Deserialize)]
struct CompetitionNode {
    clubs: Connection<SlugNode>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Connection<T> {
    #[serde(default)]
    nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SlugNode {
    slug: String,
}

#[derive(Debug, Deserialize)]
struct ClubRoot {
    club: Option<ClubNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClubNode {
    active_players: Connection<ActivePlayerNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivePlayerNode {
    slug: String,
    #[serde(default)]
    subscriptions_count: Option<u32>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    card_supply: Option<Vec<IgnoredAny>>,
}

#[derive(Debug, Deserialize)]
struct PlayerRoot {
    player: Option<PlayerNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerNode {
    age: Option<u32>,
    position: Option<String>,
    shirt_number: Option<u32>,
    picture_url: Option<String>,
    display_name: Option<String>,
    l5: Option<f64>,
    l15: Option<f64>,
    active_club: Option<ActiveClubNode>,
    country: Option<CountryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActiveClubNode {
    slug: Option<String>,
    picture_url: Option<String>,
    domestic_league: Option<SlugNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryNode {
    flag_url: Option<String>,
    code: Option<String>,
}

/// GraphQL client for the remote football data API
pub struct GraphqlGateway {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GraphqlGateway {
    pub fn new(
        endpoint: String,
        api_key: String,
        request_timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    async fn run_query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("APIKEY", &self.api_key)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: summarize_body(&body),
            });
        }

        let payload: GraphqlResponse<T> = response.json().await?;
        unwrap_payload(payload)
    }
}

fn unwrap_payload<T>(payload: GraphqlResponse<T>) -> Result<T, GatewayError> {
    if !payload.errors.is_empty() {
        let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
        return Err(GatewayError::Graphql(messages.join("; ")));
    }

    payload.data.ok_or(GatewayError::MissingData)
}

fn summarize_body(raw: &str) -> String {
    const MAX_CHARS: usize = 300;
    let compact = raw.replace(['\n', '\r'], " ");
    if compact.chars().count() > MAX_CHARS {
        let truncated: String = compact.chars().take(MAX_CHARS).collect();
        format!("{}…", truncated)
    } else {
        compact
    }
}

fn domestic_league_ids(root: LeaguesRoot) -> Vec<LeagueId> {
    root.leagues
        .into_iter()
        .filter(|league| league.format == DOMESTIC_LEAGUE_FORMAT)
        .map(|league| league.slug)
        .collect()
}

fn club_ids(root: CompetitionRoot) -> Vec<ClubId> {
    root.competition
        .map(|competition| {
            competition
                .clubs
                .nodes
                .into_iter()
                .map(|club| club.slug)
                .collect()
        })
        .unwrap_or_default()
}

/// Only players with at least one card supply entry are eligible
fn eligible_candidates(root: ClubRoot) -> Vec<CandidateSummary> {
    let Some(club) = root.club else {
        return Vec::new();
    };

    club.active_players
        .nodes
        .into_iter()
        .filter(|player| {
            player
                .card_supply
                .as_ref()
                .is_some_and(|supply| !supply.is_empty())
        })
        .map(|player| CandidateSummary {
            identifier: player.slug,
            display_name: player.display_name.unwrap_or_default(),
            popularity_score: player.subscriptions_count.unwrap_or(0),
        })
        .collect()
}

fn rounded_score(score: Option<f64>) -> u32 {
    score.unwrap_or(0.0).round().max(0.0) as u32
}

/// Convert a remote player record, dropping records without a known age
fn subject_from_player(identifier: &str, player: PlayerNode) -> Option<SubjectAttributes> {
    let age = player.age.unwrap_or(0);
    if age == 0 {
        return None;
    }

    let (club_id, club_picture_url, club_league_id) = match player.active_club {
        Some(club) => (
            club.slug.unwrap_or_default(),
            club.picture_url.unwrap_or_default(),
            club.domestic_league.map(|l| l.slug).unwrap_or_default(),
        ),
        None => Default::default(),
    };
    let (national_flag_url, nationality_code) = match player.country {
        Some(country) => (
            country.flag_url.unwrap_or_default(),
            country.code.unwrap_or_default().to_uppercase(),
        ),
        None => Default::default(),
    };

    Some(SubjectAttributes {
        identifier: identifier.to_string(),
        display_name: player.display_name.unwrap_or_default(),
        age,
        position: Position::from_remote(player.position.as_deref().unwrap_or_default()),
        shirt_number: player.shirt_number.unwrap_or(0),
        picture_url: player.picture_url.unwrap_or_default(),
        club_id,
        club_picture_url,
        club_league_id,
        national_flag_url,
        nationality_code,
        recent_form_short: rounded_score(player.l5),
        recent_form_long: rounded_score(player.l15),
    })
}

#[async_trait]
impl PlayerGateway for GraphqlGateway {
    async fn list_domestic_leagues(&self) -> Result<Vec<LeagueId>, GatewayError> {
        let data: FootballData<LeaguesRoot> = self.run_query(LEAGUES_QUERY, json!({})).await?;
        Ok(domestic_league_ids(data.football))
    }

    async fn list_clubs(&self, league_id: &str) -> Result<Vec<ClubId>, GatewayError> {
        let data: FootballData<CompetitionRoot> = self
            .run_query(COMPETITION_CLUBS_QUERY, json!({ "slug": league_id }))
            .await?;
        Ok(club_ids(data.football))
    }

    async fn list_active_players(
        &self,
        club_id: &str,
    ) -> Result<Vec<CandidateSummary>, GatewayError> {
        let data: FootballData<ClubRoot> = self
            .run_query(CLUB_PLAYERS_QUERY, json!({ "slug": club_id }))
            .await?;
        Ok(eligible_candidates(data.football))
    }

    async fn fetch_player_detail(&self, player_id: &str) -> Option<SubjectAttributes> {
        if player_id.trim().is_empty() {
            return None;
        }

        let data: FootballData<PlayerRoot> = match self
            .run_query(PLAYER_DETAIL_QUERY, json!({ "slug": player_id }))
            .await
        {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to fetch player '{}': {}", player_id, e);
                return None;
            }
        };

        let subject = data
            .football
            .player
            .and_then(|player| subject_from_player(player_id, player));
        if subject.is_none() {
            debug!("Player '{}' is unknown to the remote source", player_id);
        }
        subject
    }
}
