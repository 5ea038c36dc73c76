use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use futures_util::future::join_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, error, info, warn};

use crate::gateway::{GatewayError, PlayerGateway};
use footle_core::{BuildError, rank_candidates, shuffle_presentation};
use footle_types::{ClubId, RosterSnapshot};

/// Crawls leagues, clubs and players into a ranked and shuffled roster
pub struct RosterBuilder {
    gateway: Arc<dyn PlayerGateway>,
    limiter: Arc<Semaphore>,
}

impl RosterBuilder {
    pub fn new(gateway: Arc<dyn PlayerGateway>, max_concurrent_requests: usize) -> Self {
        Self {
            gateway,
            limiter: Arc::new(Semaphore::new(max_concurrent_requests.max(1))),
        }
    }

    /// Build a roster shuffled with a time-seeded RNG
    pub async fn build(&self, target_size: usize) -> Result<RosterSnapshot, BuildError> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        debug!("Seeding presentation shuffle with {}", seed);

        self.build_with_rng(target_size, &mut StdRng::seed_from_u64(seed))
            .await
    }

    pub async fn build_with_rng<R: Rng + ?Sized>(
        &self,
        target_size: usize,
        rng: &mut R,
    ) -> Result<RosterSnapshot, BuildError> {
        let leagues = match self.gateway.list_domestic_leagues().await {
            Ok(leagues) => leagues,
            Err(e) => {
                warn!("Failed to list domestic leagues: {}", e);
                Vec::new()
            }
        };
        info!("Found {} domestic leagues", leagues.len());

        let clubs = self
            .fan_out("clubs", leagues, |gateway, league_id| async move {
                gateway.list_clubs(&league_id).await
            })
            .await;
        let clubs = unique_clubs(clubs);
        info!("Found {} clubs", clubs.len());

        let candidates = self
            .fan_out("players", clubs, |gateway, club_id| async move {
                gateway.list_active_players(&club_id).await
            })
            .await;
        info!("Found {} eligible players", candidates.len());

        let mut ranked = rank_candidates(candidates, target_size)?;
        shuffle_presentation(&mut ranked, rng);

        info!("Built roster of {} candidates", ranked.len());
        Ok(RosterSnapshot::new(chrono::Utc::now().to_rfc3339(), ranked))
    }

    /// Run one task per key and collect every successful result.
    ///
    /// Failed keys contribute nothing. All tasks are awaited before the
    /// accumulated items are returned.
    async fn fan_out<T, F, Fut>(&self, stage: &'static str, keys: Vec<String>, fetch: F) -> Vec<T>
    where
        T: Send + 'static,
        F: Fn(Arc<dyn PlayerGateway>, String) -> Fut,
        Fut: Future<Output = Result<Vec<T>, GatewayError>> + Send + 'static,
    {
        let accumulator = Arc::new(Mutex::new(Vec::new()));

        let handles = keys.into_iter().map(|key| {
            let accumulator = accumulator.clone();
            let limiter = self.limiter.clone();
            let request = fetch(self.gateway.clone(), key.clone());

            tokio::spawn(async move {
                let Ok(_permit) = limiter.acquire_owned().await else {
                    warn!("Request limiter closed, skipping {} of '{}'", stage, key);
                    return;
                };

                match request.await {
                    Ok(items) => {
                        debug!("Fetched {} {} for '{}'", items.len(), stage, key);
                        accumulator.lock().await.extend(items);
                    }
                    Err(e) => warn!("Failed to fetch {} for '{}': {}", stage, key, e),
                }
            })
        });

        for result in join_all(handles).await {
            if let Err(e) = result {
                error!("A {} task did not complete: {}", stage, e);
            }
        }

        std::mem::take(&mut *accumulator.lock().await)
    }
}

fn unique_clubs(clubs: Vec<ClubId>) -> Vec<ClubId> {
    let mut seen = HashSet::new();
    clubs
        .into_iter()
        .filter(|club| seen.insert(club.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_clubs_keeps_first_occurrence_order() {
        let clubs = vec![
            "psg".to_string(),
            "lyon".to_string(),
            "psg".to_string(),
            "nice".to_string(),
        ];

        assert_eq!(unique_clubs(clubs), vec!["psg", "lyon", "nice"]);
    }
}
