pub mod connection;
pub mod entities;
pub mod repositories;

use anyhow::Result;
use async_trait::async_trait;
use footle_types::RosterSnapshot;

/// Named key-value persistence for roster snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Store `roster` under `name`, replacing any previous snapshot
    async fn save(&self, name: &str, roster: &RosterSnapshot) -> Result<()>;

    /// Load the snapshot stored under `name`, `None` if nothing was saved yet
    async fn load(&self, name: &str) -> Result<Option<RosterSnapshot>>;
}
