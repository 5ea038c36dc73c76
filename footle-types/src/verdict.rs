use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Closeness tier of one attribute comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MatchLevel {
    Exact,   // Green - identical value
    Partial, // Yellow - same league / same continent
    None,    // Red - no relation
}

impl MatchLevel {
    pub fn color(&self) -> &'static str {
        match self {
            MatchLevel::Exact => "green",
            MatchLevel::Partial => "yellow",
            MatchLevel::None => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Direction {
    GuessHigherThanSecret,
    GuessLowerThanSecret,
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AttributeKind {
    Age,
    Club,
    Nationality,
    ShirtNumber,
    Position,
    RecentFormShort,
    RecentFormLong,
}

impl AttributeKind {
    /// Display order of the verdict row
    pub const ORDERED: [AttributeKind; 7] = [
        AttributeKind::Age,
        AttributeKind::Club,
        AttributeKind::Nationality,
        AttributeKind::ShirtNumber,
        AttributeKind::Position,
        AttributeKind::RecentFormShort,
        AttributeKind::RecentFormLong,
    ];

    /// Numeric attributes carry a direction hint, the others never do
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            AttributeKind::Age
                | AttributeKind::ShirtNumber
                | AttributeKind::RecentFormShort
                | AttributeKind::RecentFormLong
        )
    }

    /// Attributes whose display value is an image url rather than text
    pub fn is_image(&self) -> bool {
        matches!(self, AttributeKind::Club | AttributeKind::Nationality)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AttributeVerdict {
    pub attribute: AttributeKind,
    pub display_value: String,
    pub match_level: MatchLevel,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VerdictHeader {
    pub picture_url: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WinBanner {
    pub secret_name: String,
    pub attempt_count: u32,
}

/// Structured result of one guess attempt against the daily secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonVerdict {
    pub header: VerdictHeader,
    pub attributes: Vec<AttributeVerdict>,
    pub is_win: bool,
    pub attempt_count: u32, // Echoed from the client, not validated
    pub banner: Option<WinBanner>,
}

impl ComparisonVerdict {
    pub fn attribute(&self, kind: AttributeKind) -> Option<&AttributeVerdict> {
        self.attributes.iter().find(|a| a.attribute == kind)
    }

    /// True when every compared attribute landed in the exact tier
    pub fn all_exact(&self) -> bool {
        self.attributes
            .iter()
            .all(|a| a.match_level == MatchLevel::Exact)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessOutcome {
    Scored(ComparisonVerdict),
    InvalidGuess,
}

impl GuessOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, GuessOutcome::Scored(verdict) if verdict.is_win)
    }

    pub fn verdict(&self) -> Option<&ComparisonVerdict> {
        match self {
            GuessOutcome::Scored(verdict) => Some(verdict),
            GuessOutcome::InvalidGuess => None,
        }
    }
}
