use async_trait::async_trait;

use footle_types::{CandidateSummary, ClubId, LeagueId, SubjectAttributes};

pub mod graphql;

pub use graphql::GraphqlGateway;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Remote API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Remote API reported errors: {0}")]
    Graphql(String),
    #[error("Remote API response carried no data")]
    MissingData,
}

/// Read-only queries against the remote football data source
#[async_trait]
pub trait PlayerGateway: Send + Sync {
    /// Leagues played in a domestic league format
    async fn list_domestic_leagues(&self) -> Result<Vec<LeagueId>, GatewayError>;

    async fn list_clubs(&self, league_id: &str) -> Result<Vec<ClubId>, GatewayError>;

    /// Players of a club that have at least one limited card in supply
    async fn list_active_players(
        &self,
        club_id: &str,
    ) -> Result<Vec<CandidateSummary>, GatewayError>;

    /// Full detail of one player. Never fails: transport errors and
    /// unknown identifiers are logged and come back as `None`.
    async fn fetch_player_detail(&self, player_id: &str) -> Option<SubjectAttributes>;
}
