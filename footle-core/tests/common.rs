#![allow(dead_code)]

use footle_types::{CandidateSummary, Position, RosterSnapshot, SubjectAttributes};

/// Creates a player matching the reference secret used across scenarios
pub fn reference_secret() -> SubjectAttributes {
    SubjectAttributes {
        identifier: "reference-secret".to_string(),
        display_name: "Reference Secret".to_string(),
        age: 25,
        position: Position::Forward,
        shirt_number: 10,
        picture_url: "https://img/players/reference.png".to_string(),
        club_id: "A".to_string(),
        club_picture_url: "https://img/clubs/a.png".to_string(),
        club_league_id: "L1".to_string(),
        national_flag_url: "https://img/flags/fr.png".to_string(),
        nationality_code: "FR".to_string(),
        recent_form_short: 70,
        recent_form_long: 65,
    }
}

/// Creates a distinct player with the given identifier and otherwise
/// identical attributes to the reference secret
pub fn lookalike(identifier: &str) -> SubjectAttributes {
    SubjectAttributes {
        identifier: identifier.to_string(),
        display_name: format!("Player {}", identifier),
        ..reference_secret()
    }
}

/// Creates a spread of players with varied attributes
pub fn varied_players() -> Vec<SubjectAttributes> {
    let codes = ["FR", "BR", "JP", "SN", "AU", "RS", "GB-ENG"];
    let positions = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
        Position::Unknown,
    ];

    (0..20u32)
        .map(|i| SubjectAttributes {
            identifier: format!("player-{}", i),
            display_name: format!("Player {}", i),
            age: 18 + i,
            position: positions[i as usize % positions.len()],
            shirt_number: 1 + (i * 3) % 40,
            picture_url: format!("https://img/players/{}.png", i),
            club_id: format!("club-{}", i % 6),
            club_picture_url: format!("https://img/clubs/{}.png", i % 6),
            club_league_id: format!("league-{}", i % 3),
            national_flag_url: format!("https://img/flags/{}.png", codes[i as usize % codes.len()]),
            nationality_code: codes[i as usize % codes.len()].to_string(),
            recent_form_short: (i * 7) % 100,
            recent_form_long: (i * 5) % 100,
        })
        .collect()
}

/// Creates a roster of `size` candidates named `candidate-0..size`
pub fn roster_of(size: usize) -> RosterSnapshot {
    let candidates = (0..size)
        .map(|i| CandidateSummary {
            identifier: format!("candidate-{}", i),
            display_name: format!("Candidate {}", i),
            popularity_score: (size - i) as u32,
        })
        .collect();

    RosterSnapshot::new("2024-01-01T00:00:00+00:00".to_string(), candidates)
}
