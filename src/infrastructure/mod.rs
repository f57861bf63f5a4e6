use std::sync::Arc;

use crate::{config::StorageConfig, domain::repositories::UserRepository};

pub mod database;
pub mod repositories;

use repositories::{InMemoryUserRepository, PostgresUserRepository};

/// Builds the repository selected by configuration. For PostgreSQL this
/// connects the pool and applies pending migrations.
pub async fn build_user_repository(
    storage: &StorageConfig,
) -> anyhow::Result<Arc<dyn UserRepository>> {
    match storage {
        StorageConfig::Memory => {
            tracing::warn!("using in-memory storage, data will not survive a restart");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = database::create_pool(database_url, *max_connections).await?;
            database::run_migrations(&pool).await?;
            tracing::info!(max_connections, "connected to postgres");
            Ok(PostgresUserRepository::new(pool))
        }
    }
}
