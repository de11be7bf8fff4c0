use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    /// Case-insensitive email lookup against the seeded accounts.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

/// Holds the session's signed-in user, if any.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn current_user(&self) -> Result<Option<User>, RepositoryError>;
    async fn set_user(&self, user: Option<User>) -> Result<(), RepositoryError>;
}
