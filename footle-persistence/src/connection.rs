use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

pub async fn connect_to_database() -> Result<DatabaseConnection, DbErr> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://footle.db?mode=rwc".to_string());

    connect_to(&database_url).await
}

pub async fn connect_to(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to snapshot database at {}", database_url);
    Database::connect(database_url).await
}

pub async fn connect_to_memory_database() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}

/// Connect using `DATABASE_URL` and bring the schema up to date
pub async fn connect_and_migrate() -> Result<DatabaseConnection, DbErr> {
    let db = connect_to_database().await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
