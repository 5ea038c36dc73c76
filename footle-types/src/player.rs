use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub type PlayerId = String;
pub type ClubId = String;
pub type LeagueId = String;

/// One roster entry as discovered from the remote source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CandidateSummary {
    pub identifier: PlayerId,
    pub display_name: String,
    pub popularity_score: u32, // Ranking only, never shown to players
}

/// The persisted candidate population, in presentation order.
///
/// The order is fixed at build time and drives the daily secret mapping,
/// so it must survive restarts untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RosterSnapshot {
    pub built_at: String, // ISO 8601 string
    pub candidates: Vec<CandidateSummary>,
}

impl RosterSnapshot {
    pub fn new(built_at: String, candidates: Vec<CandidateSummary>) -> Self {
        Self {
            built_at,
            candidates,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CandidateSummary> {
        self.candidates.get(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
    #[serde(rename = "ERR")]
    Unknown,
}

impl Position {
    /// Map the remote source's position name onto a position
    pub fn from_remote(name: &str) -> Self {
        match name {
            "Goalkeeper" => Position::Goalkeeper,
            "Defender" => Position::Defender,
            "Midfielder" => Position::Midfielder,
            "Forward" => Position::Forward,
            _ => Position::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
            Position::Unknown => "ERR",
        }
    }
}

/// Full detail of one player, fetched live for every comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubjectAttributes {
    pub identifier: PlayerId,
    pub display_name: String,
    pub age: u32,
    pub position: Position,
    pub shirt_number: u32,
    pub picture_url: String,
    pub club_id: ClubId,
    pub club_picture_url: String,
    pub club_league_id: LeagueId,
    pub national_flag_url: String,
    pub nationality_code: String, // Upper-cased country code
    pub recent_form_short: u32,   // Last 5 games average, rounded
    pub recent_form_long: u32,    // Last 15 games average, rounded
}

impl SubjectAttributes {
    /// A zero age is what the remote source reports for players it cannot
    /// resolve; such records never take part in a comparison.
    pub fn is_known(&self) -> bool {
        self.age != 0
    }
}
