use std::collections::HashSet;

use footle_types::CandidateSummary;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Insufficient roster: wanted {wanted} candidates but only found {found}")]
    InsufficientRoster { wanted: usize, found: usize },
}

/// Deduplicate, rank by popularity and keep the top `target_size`.
///
/// The first occurrence of an identifier wins. Sorting is stable, so ties
/// keep the order in which candidates were discovered.
pub fn rank_candidates(
    candidates: Vec<CandidateSummary>,
    target_size: usize,
) -> Result<Vec<CandidateSummary>, BuildError> {
    let discovered = candidates.len();
    let mut seen = HashSet::new();
    let mut unique: Vec<CandidateSummary> = candidates
        .into_iter()
        .filter(|c| seen.insert(c.identifier.clone()))
        .collect();

    debug!(
        "Ranking {} unique candidates out of {} discovered",
        unique.len(),
        discovered
    );

    if unique.len() < target_size {
        return Err(BuildError::InsufficientRoster {
            wanted: target_size,
            found: unique.len(),
        });
    }

    unique.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
    unique.truncate(target_size);
    Ok(unique)
}

/// Shuffle into the permanent presentation order
pub fn shuffle_presentation<R: Rng + ?Sized>(candidates: &mut [CandidateSummary], rng: &mut R) {
    candidates.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidate(id: &str, score: u32) -> CandidateSummary {
        CandidateSummary {
            identifier: id.to_string(),
            display_name: id.to_uppercase(),
            popularity_score: score,
        }
    }

    fn ids(candidates: &[CandidateSummary]) -> Vec<&str> {
        candidates.iter().map(|c| c.identifier.as_str()).collect()
    }

    #[test]
    fn test_ranks_by_popularity_descending() {
        let ranked = rank_candidates(
            vec![candidate("a", 10), candidate("b", 30), candidate("c", 20)],
            3,
        )
        .unwrap();

        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_truncates_to_target() {
        let ranked = rank_candidates(
            vec![
                candidate("a", 10),
                candidate("b", 30),
                candidate("c", 20),
                candidate("d", 5),
            ],
            2,
        )
        .unwrap();

        assert_eq!(ids(&ranked), vec!["b", "c"]);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let ranked = rank_candidates(
            vec![
                candidate("first", 10),
                candidate("top", 50),
                candidate("second", 10),
                candidate("third", 10),
            ],
            4,
        )
        .unwrap();

        assert_eq!(ids(&ranked), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let ranked = rank_candidates(
            vec![candidate("a", 10), candidate("b", 20), candidate("a", 99)],
            2,
        )
        .unwrap();

        assert_eq!(ids(&ranked), vec!["b", "a"]);
        assert_eq!(ranked[1].popularity_score, 10);
    }

    #[test]
    fn test_shortfall_is_an_error() {
        let result = rank_candidates(
            vec![candidate("a", 10), candidate("a", 10), candidate("b", 5)],
            3,
        );

        assert_eq!(
            result,
            Err(BuildError::InsufficientRoster {
                wanted: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut candidates: Vec<_> = (0..50).map(|i| candidate(&format!("p{}", i), i)).collect();
        let original = candidates.clone();
        let mut rng = StdRng::seed_from_u64(7);

        shuffle_presentation(&mut candidates, &mut rng);

        assert_eq!(candidates.len(), original.len());
        for c in &original {
            assert!(candidates.contains(c));
        }
        assert_ne!(candidates, original);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_same_seed() {
        let base: Vec<_> = (0..20).map(|i| candidate(&format!("p{}", i), i)).collect();
        let mut first = base.clone();
        let mut second = base;

        shuffle_presentation(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle_presentation(&mut second, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }
}
