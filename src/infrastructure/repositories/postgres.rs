use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::{
    domain::{
        errors::{DomainError, DomainResult},
        models::{NewUser, User, UserChanges},
        repositories::UserRepository,
    },
    infrastructure::database::PgPool,
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, first_name, last_name, address, phone, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, first_name, last_name, address, phone, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(record.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        if user.id.is_some() {
            // blocks concurrent inserts until the identity sequence is bumped below
            sqlx::query(r#"LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE"#)
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        let record = match user.id {
            Some(id) => sqlx::query_as::<_, UserRecord>(
                r#"
                INSERT INTO users (id, first_name, last_name, address, phone, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, first_name, last_name, address, phone, created_at
                "#,
            )
            .bind(id)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.address)
            .bind(user.phone)
            .bind(user.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| match db_error(err) {
                DomainError::AlreadyExists(_) => DomainError::AlreadyExists(format!("user {id}")),
                other => other,
            })?,
            None => sqlx::query_as::<_, UserRecord>(
                r#"
                INSERT INTO users (first_name, last_name, address, phone, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, first_name, last_name, address, phone, created_at
                "#,
            )
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.address)
            .bind(user.phone)
            .bind(user.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error)?,
        };

        if user.id.is_some() {
            // keep generated ids clear of explicitly inserted ones
            sqlx::query(
                r#"
                SELECT setval(
                    pg_get_serial_sequence('users', 'id'),
                    GREATEST((SELECT MAX(id) FROM users), 1)
                )
                "#,
            )
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)?;
        Ok(record.into())
    }

    async fn update(&self, id: i64, changes: UserChanges) -> DomainResult<Option<User>> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let existing = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, first_name, last_name, address, phone, created_at
            FROM users
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error)?;

        let Some(existing) = existing else {
            return Ok(None);
        };
        let mut user = User::from(existing);
        user.apply(changes);

        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET first_name = $2,
                last_name = $3,
                address = $4,
                phone = $5,
                created_at = $6
            WHERE id = $1
            RETURNING id, first_name, last_name, address, phone, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.address)
        .bind(user.phone)
        .bind(user.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        Ok(Some(record.into()))
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i64,
    first_name: String,
    last_name: String,
    address: Option<String>,
    phone: i64,
    created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            address: value.address,
            phone: value.phone,
            created_at: value.created_at,
        }
    }
}

fn db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DomainError::AlreadyExists(db_err.message().to_string());
        }
    }
    DomainError::Other(err.into())
}
