use std::sync::Arc;

use crate::domain::{
    errors::{DomainError, DomainResult},
    repositories::UserRepository,
};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> DomainResult<()> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::user_not_found(id));
        }
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}
