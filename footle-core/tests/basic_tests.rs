mod common;

use chrono::{Duration, TimeZone, Utc};
use common::*;
use footle_core::{Comparator, ComparatorConfig, DailySelector, WinRule};
use footle_types::{AttributeKind, Direction, GuessOutcome, MatchLevel, SubjectAttributes};

fn scored(outcome: GuessOutcome) -> footle_types::ComparisonVerdict {
    match outcome {
        GuessOutcome::Scored(verdict) => verdict,
        GuessOutcome::InvalidGuess => panic!("Expected a scored verdict"),
    }
}

#[test]
fn test_identical_guess_scenario() {
    let comparator = Comparator::default();
    let secret = reference_secret();

    let verdict = scored(comparator.compare(&secret, Some(&secret.clone()), 3));

    let order: Vec<_> = verdict.attributes.iter().map(|a| a.attribute).collect();
    assert_eq!(order, AttributeKind::ORDERED.to_vec());
    assert!(verdict
        .attributes
        .iter()
        .all(|a| a.match_level == MatchLevel::Exact && a.direction == Direction::NotApplicable));
    assert!(verdict.is_win);
    assert_eq!(verdict.header.display_name, "Reference Secret");
    assert_eq!(verdict.banner.unwrap().secret_name, "Reference Secret");
}

#[test]
fn test_identifier_win_implies_all_exact() {
    let comparator = Comparator::default();

    for player in varied_players() {
        let verdict = scored(comparator.compare(&player, Some(&player), 1));
        assert!(verdict.is_win);
        assert!(verdict.all_exact(), "{} should match itself", player.identifier);
    }
}

#[test]
fn test_attempt_count_never_changes_tiers() {
    let comparator = Comparator::default();
    let players = varied_players();

    for secret in &players {
        for guess in &players {
            let once = scored(comparator.compare(secret, Some(guess), 1));
            let many = scored(comparator.compare(secret, Some(guess), 42));

            assert_eq!(once.attributes, many.attributes);
            assert_eq!(once.is_win, many.is_win);
            assert_eq!(many.attempt_count, 42);
        }
    }
}

#[test]
fn test_comparison_is_deterministic() {
    let comparator = Comparator::default();
    let players = varied_players();

    for secret in &players {
        for guess in &players {
            assert_eq!(
                comparator.compare(secret, Some(guess), 5),
                comparator.compare(secret, Some(guess), 5)
            );
        }
    }
}

#[test]
fn test_direction_only_on_numeric_misses() {
    let comparator = Comparator::default();
    let players = varied_players();

    for secret in &players {
        for guess in &players {
            let verdict = scored(comparator.compare(secret, Some(guess), 1));
            for attribute in &verdict.attributes {
                let has_direction = attribute.direction != Direction::NotApplicable;
                let expected = attribute.attribute.is_numeric()
                    && attribute.match_level == MatchLevel::None;
                assert_eq!(has_direction, expected);
            }
        }
    }
}

#[test]
fn test_different_codes_never_exact_nationality() {
    let comparator = Comparator::default();
    let secret = reference_secret();
    let guess = SubjectAttributes {
        nationality_code: "BE".to_string(),
        ..lookalike("belgian")
    };

    let verdict = scored(comparator.compare(&secret, Some(&guess), 1));
    assert_eq!(
        verdict.attribute(AttributeKind::Nationality).unwrap().match_level,
        MatchLevel::Partial
    );
}

#[test]
fn test_zero_age_guess_is_invalid_under_every_rule() {
    let invalid = SubjectAttributes {
        age: 0,
        ..reference_secret()
    };

    for win_rule in [WinRule::IdentifierEquality, WinRule::AllAttributesExact] {
        for continent_proximity in [true, false] {
            let comparator = Comparator::new(ComparatorConfig {
                win_rule,
                continent_proximity,
            });
            assert_eq!(
                comparator.compare(&reference_secret(), Some(&invalid), 1),
                GuessOutcome::InvalidGuess
            );
        }
    }
}

#[test]
fn test_roster_of_five_advances_daily() {
    let selector = DailySelector::default();
    let roster = roster_of(5);
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();

    let today = selector.select_index(&now, roster.len()).unwrap();
    let tomorrow = selector
        .select_index(&(now + Duration::hours(24)), roster.len())
        .unwrap();

    assert_eq!(tomorrow, (today + 1) % 5);
    assert!(roster.get(today).is_some());
}
