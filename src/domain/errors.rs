use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DomainError {
    pub fn user_not_found(id: i64) -> Self {
        DomainError::NotFound(format!("user {id}"))
    }
}
