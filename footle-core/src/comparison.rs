use std::cmp::Ordering;
use std::str::FromStr;

use footle_types::{
    AttributeKind, AttributeVerdict, ComparisonVerdict, Direction, GuessOutcome, MatchLevel,
    SubjectAttributes, VerdictHeader, WinBanner,
};

use crate::continent::Continent;

/// How a guess is declared the winning one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinRule {
    /// The guessed player is the secret player
    #[default]
    IdentifierEquality,
    /// Every compared attribute matched exactly
    AllAttributesExact,
}

impl FromStr for WinRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identifier" | "identifier-equality" => Ok(WinRule::IdentifierEquality),
            "all-exact" | "all-attributes-exact" => Ok(WinRule::AllAttributesExact),
            other => Err(format!("Unknown win rule: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparatorConfig {
    pub win_rule: WinRule,
    pub continent_proximity: bool, // Same continent softens a nationality miss
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            win_rule: WinRule::IdentifierEquality,
            continent_proximity: true,
        }
    }
}

pub struct Comparator {
    config: ComparatorConfig,
}

impl Comparator {
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// Score a guess against the secret, attribute by attribute.
    ///
    /// A missing guess, or one the remote source reported with a zero age,
    /// is an invalid guess and is not compared at all. The attempt count
    /// only feeds the win banner.
    pub fn compare(
        &self,
        secret: &SubjectAttributes,
        guess: Option<&SubjectAttributes>,
        attempt_count: u32,
    ) -> GuessOutcome {
        let Some(guess) = guess.filter(|g| g.is_known()) else {
            return GuessOutcome::InvalidGuess;
        };

        let attributes: Vec<AttributeVerdict> = AttributeKind::ORDERED
            .iter()
            .map(|&kind| self.compare_attribute(kind, secret, guess))
            .collect();

        let is_win = match self.config.win_rule {
            WinRule::IdentifierEquality => guess.identifier == secret.identifier,
            WinRule::AllAttributesExact => attributes
                .iter()
                .all(|a| a.match_level == MatchLevel::Exact),
        };

        let banner = is_win.then(|| WinBanner {
            secret_name: secret.display_name.clone(),
            attempt_count,
        });

        GuessOutcome::Scored(ComparisonVerdict {
            header: VerdictHeader {
                picture_url: guess.picture_url.clone(),
                display_name: guess.display_name.clone(),
            },
            attributes,
            is_win,
            attempt_count,
            banner,
        })
    }

    fn compare_attribute(
        &self,
        kind: AttributeKind,
        secret: &SubjectAttributes,
        guess: &SubjectAttributes,
    ) -> AttributeVerdict {
        match kind {
            AttributeKind::Age => Self::numeric(kind, secret.age, guess.age),
            AttributeKind::ShirtNumber => {
                Self::numeric(kind, secret.shirt_number, guess.shirt_number)
            }
            AttributeKind::RecentFormShort => {
                Self::numeric(kind, secret.recent_form_short, guess.recent_form_short)
            }
            AttributeKind::RecentFormLong => {
                Self::numeric(kind, secret.recent_form_long, guess.recent_form_long)
            }
            AttributeKind::Club => {
                let level = if secret.club_id == guess.club_id {
                    MatchLevel::Exact
                } else if !secret.club_league_id.is_empty()
                    && secret.club_league_id == guess.club_league_id
                {
                    MatchLevel::Partial
                } else {
                    MatchLevel::None
                };
                Self::categorical(kind, guess.club_picture_url.clone(), level)
            }
            AttributeKind::Nationality => {
                let level = if secret.nationality_code == guess.nationality_code {
                    MatchLevel::Exact
                } else if self.config.continent_proximity
                    && Continent::from_country_code(&secret.nationality_code)
                        == Continent::from_country_code(&guess.nationality_code)
                {
                    MatchLevel::Partial
                } else {
                    MatchLevel::None
                };
                Self::categorical(kind, guess.national_flag_url.clone(), level)
            }
            AttributeKind::Position => {
                let level = if secret.position == guess.position {
                    MatchLevel::Exact
                } else {
                    MatchLevel::None
                };
                Self::categorical(kind, guess.position.code().to_string(), level)
            }
        }
    }

    fn numeric(kind: AttributeKind, secret: u32, guess: u32) -> AttributeVerdict {
        let (match_level, direction) = match guess.cmp(&secret) {
            Ordering::Equal => (MatchLevel::Exact, Direction::NotApplicable),
            Ordering::Greater => (MatchLevel::None, Direction::GuessHigherThanSecret),
            Ordering::Less => (MatchLevel::None, Direction::GuessLowerThanSecret),
        };

        AttributeVerdict {
            attribute: kind,
            display_value: guess.to_string(),
            match_level,
            direction,
        }
    }

    fn categorical(
        kind: AttributeKind,
        display_value: String,
        level: MatchLevel,
    ) -> AttributeVerdict {
        AttributeVerdict {
            attribute: kind,
            display_value,
            match_level: level,
            direction: Direction::NotApplicable,
        }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(ComparatorConfig::default())
    }
}
