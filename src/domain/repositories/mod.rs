use async_trait::async_trait;

use crate::domain::{
    errors::DomainResult,
    models::{NewUser, User, UserChanges},
};

/// Backing store for user records.
///
/// Lookups return `None` (or `false` for delete) when the id is unknown;
/// turning that into a not-found error is left to the caller.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by ascending id.
    async fn list(&self) -> DomainResult<Vec<User>>;
    async fn get(&self, id: i64) -> DomainResult<Option<User>>;
    /// Fails with `AlreadyExists` when `user.id` is taken.
    async fn insert(&self, user: NewUser) -> DomainResult<User>;
    async fn update(&self, id: i64, changes: UserChanges) -> DomainResult<Option<User>>;
    async fn delete(&self, id: i64) -> DomainResult<bool>;
}
