use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{
    errors::DomainResult,
    models::{NewUser, User},
    repositories::UserRepository,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> DomainResult<User> {
        let user = NewUser {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            phone: request.phone,
            created_at: request.created_at.unwrap_or_else(Utc::now),
        };

        let stored = self.repo.insert(user).await?;
        tracing::info!(user_id = stored.id, "user created");
        Ok(stored)
    }
}
