use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{NewUser, User, UserChanges},
    repositories::UserRepository,
};

struct UserTable {
    users: Vec<User>,
    // None once i64::MAX has been handed out
    next_id: Option<i64>,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: Some(1),
        }
    }
}

impl UserTable {
    fn position(&self, id: i64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// Process-local user store. Contents are lost when the process exits.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let table = self.table.read().await;
        let mut users = table.users.clone();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get(&self, id: i64) -> DomainResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut table = self.table.write().await;

        let id = match user.id {
            Some(id) if table.position(id).is_some() => {
                return Err(DomainError::AlreadyExists(format!("user {id}")));
            }
            Some(id) => id,
            None => {
                // skip ids that were handed out explicitly
                let mut id = table.next_id.ok_or_else(ids_exhausted)?;
                while table.position(id).is_some() {
                    id = id.checked_add(1).ok_or_else(ids_exhausted)?;
                }
                id
            }
        };
        table.next_id = match (table.next_id, id.checked_add(1)) {
            (Some(current), Some(next)) => Some(current.max(next)),
            _ => None,
        };

        let stored = User {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            address: user.address,
            phone: user.phone,
            created_at: user.created_at,
        };
        table.users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> DomainResult<Option<User>> {
        let mut table = self.table.write().await;
        Ok(table.users.iter_mut().find(|u| u.id == id).map(|existing| {
            existing.apply(changes);
            existing.clone()
        }))
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let mut table = self.table.write().await;
        match table.position(id) {
            Some(index) => {
                table.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn ids_exhausted() -> DomainError {
    DomainError::Other(anyhow::anyhow!("no user ids left to assign"))
}
