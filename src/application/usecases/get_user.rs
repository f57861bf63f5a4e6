use std::sync::Arc;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> DomainResult<User> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}
