use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::gateway::PlayerGateway;
use footle_types::SubjectAttributes;

/// Details of today's secret and of the submitted guess, keyed by role
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedPair {
    pub secret: Option<SubjectAttributes>,
    pub guess: Option<SubjectAttributes>,
}

pub struct PlayerDetailResolver {
    gateway: Arc<dyn PlayerGateway>,
    join_timeout: Duration,
}

impl PlayerDetailResolver {
    pub fn new(gateway: Arc<dyn PlayerGateway>, join_timeout: Duration) -> Self {
        Self {
            gateway,
            join_timeout,
        }
    }

    /// Fetch both players concurrently and wait for the two lookups
    pub async fn resolve_two(&self, secret_id: &str, guess_id: &str) -> ResolvedPair {
        let secret_task = self.spawn_lookup(secret_id);
        let guess_task = self.spawn_lookup(guess_id);

        let (secret, guess) = tokio::join!(
            collect_lookup("secret", secret_id, secret_task),
            collect_lookup("guess", guess_id, guess_task),
        );

        ResolvedPair { secret, guess }
    }

    fn spawn_lookup(
        &self,
        player_id: &str,
    ) -> JoinHandle<Result<Option<SubjectAttributes>, tokio::time::error::Elapsed>> {
        let gateway = self.gateway.clone();
        let player_id = player_id.to_string();
        let join_timeout = self.join_timeout;

        tokio::spawn(async move {
            tokio::time::timeout(join_timeout, gateway.fetch_player_detail(&player_id)).await
        })
    }
}

async fn collect_lookup(
    role: &str,
    player_id: &str,
    task: JoinHandle<Result<Option<SubjectAttributes>, tokio::time::error::Elapsed>>,
) -> Option<SubjectAttributes> {
    match task.await {
        Ok(Ok(subject)) => subject,
        Ok(Err(_)) => {
            warn!("Timed out resolving {} player '{}'", role, player_id);
            None
        }
        Err(e) => {
            error!("Lookup of {} player '{}' failed: {}", role, player_id, e);
            None
        }
    }
}
