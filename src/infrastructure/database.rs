use sqlx::{Pool, Postgres, migrate::Migrator, postgres::PgPoolOptions};

pub type PgPool = Pool<Postgres>;

// Embedded so the binary can create its schema on startup.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the `users` table if it does not exist yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
