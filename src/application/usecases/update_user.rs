use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{User, UserChanges},
    repositories::UserRepository,
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> DomainResult<User> {
        let changes = UserChanges {
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            phone: request.phone,
            created_at: request.created_at,
        };

        let updated = self
            .repo
            .update(request.id, changes)
            .await?
            .ok_or_else(|| DomainError::user_not_found(request.id))?;
        tracing::info!(user_id = updated.id, "user updated");
        Ok(updated)
    }
}
