use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use tracing::info;

use crate::SnapshotStore;
use crate::entities::{prelude::*, snapshots};
use footle_types::RosterSnapshot;

pub struct SnapshotRepository {
    db: DatabaseConnection,
}

impl SnapshotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn save_roster(&self, name: &str, roster: &RosterSnapshot) -> Result<()> {
        let payload = serde_json::to_vec(roster).context("Failed to encode roster snapshot")?;
        let entry_count =
            i32::try_from(roster.len()).context("Roster has too many entries to store")?;

        let snapshot_model = snapshots::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            payload: ActiveValue::Set(payload),
            entry_count: ActiveValue::Set(entry_count),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        // Rebuilding a roster replaces the previous snapshot of the same name
        Snapshots::insert(snapshot_model)
            .on_conflict(
                OnConflict::column(snapshots::Column::Name)
                    .update_columns([
                        snapshots::Column::Payload,
                        snapshots::Column::EntryCount,
                        snapshots::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        info!("Saved snapshot '{}' with {} entries", name, roster.len());
        Ok(())
    }

    pub async fn load_roster(&self, name: &str) -> Result<Option<RosterSnapshot>> {
        let Some(model) = Snapshots::find_by_id(name.to_string()).one(&self.db).await? else {
            return Ok(None);
        };

        let roster: RosterSnapshot = serde_json::from_slice(&model.payload)
            .with_context(|| format!("Snapshot '{}' could not be decoded", name))?;

        if usize::try_from(model.entry_count).ok() != Some(roster.len()) {
            anyhow::bail!(
                "Snapshot '{}' holds {} entries but was saved with {}",
                name,
                roster.len(),
                model.entry_count
            );
        }

        Ok(Some(roster))
    }
}

#[async_trait]
impl SnapshotStore for SnapshotRepository {
    async fn save(&self, name: &str, roster: &RosterSnapshot) -> Result<()> {
        self.save_roster(name, roster).await
    }

    async fn load(&self, name: &str) -> Result<Option<RosterSnapshot>> {
        self.load_roster(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use footle_types::CandidateSummary;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::sea_query::Expr;

    async fn setup_test_db() -> SnapshotRepository {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SnapshotRepository::new(db)
    }

    fn create_test_roster(size: usize) -> RosterSnapshot {
        let candidates = (0..size)
            .map(|i| CandidateSummary {
                identifier: format!("player-{}", i),
                display_name: format!("Player {}", i),
                popularity_score: (i * 17 % 101) as u32,
            })
            .collect();

        RosterSnapshot::new(chrono::Utc::now().to_rfc3339(), candidates)
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let repo = setup_test_db().await;
        let roster = create_test_roster(25);

        repo.save_roster("players", &roster).await.unwrap();

        let loaded = repo.load_roster("players").await.unwrap().unwrap();
        assert_eq!(loaded, roster);
        assert_eq!(loaded.candidates[0].identifier, "player-0");
        assert_eq!(loaded.candidates[24].identifier, "player-24");
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_none() {
        let repo = setup_test_db().await;

        let loaded = repo.load_roster("players").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_snapshot() {
        let repo = setup_test_db().await;

        repo.save_roster("players", &create_test_roster(10)).await.unwrap();
        let rebuilt = create_test_roster(3);
        repo.save_roster("players", &rebuilt).await.unwrap();

        let loaded = repo.load_roster("players").await.unwrap().unwrap();
        assert_eq!(loaded, rebuilt);
    }

    #[tokio::test]
    async fn test_snapshots_are_keyed_by_name() {
        let repo = setup_test_db().await;
        let first = create_test_roster(4);
        let second = create_test_roster(6);

        repo.save("players", &first).await.unwrap();
        repo.save("players-staging", &second).await.unwrap();

        assert_eq!(repo.load("players").await.unwrap(), Some(first));
        assert_eq!(repo.load("players-staging").await.unwrap(), Some(second));
        assert_eq!(repo.load("other").await.unwrap(), None);
    }

    async fn overwrite_entry_count(repo: &SnapshotRepository, entry_count: i32) {
        Snapshots::update_many()
            .col_expr(snapshots::Column::EntryCount, Expr::value(entry_count))
            .exec(&repo.db)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_saved_entry_count_matches_roster() {
        let repo = setup_test_db().await;
        repo.save_roster("players", &create_test_roster(12)).await.unwrap();

        let model = Snapshots::find_by_id("players".to_string())
            .one(&repo.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(model.entry_count, 12);
    }

    #[tokio::test]
    async fn test_entry_count_mismatch_is_rejected() {
        let repo = setup_test_db().await;
        repo.save_roster("players", &create_test_roster(5)).await.unwrap();

        overwrite_entry_count(&repo, 6).await;
        let error = repo.load_roster("players").await.unwrap_err();
        assert!(error.to_string().contains("holds 5 entries but was saved with 6"));

        overwrite_entry_count(&repo, -1).await;
        assert!(repo.load_roster("players").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_roster_roundtrip() {
        let repo = setup_test_db().await;
        let empty = create_test_roster(0);

        repo.save("players", &empty).await.unwrap();

        let loaded = repo.load("players").await.unwrap().unwrap();
        assert!(loaded.is_empty());
    }
}
