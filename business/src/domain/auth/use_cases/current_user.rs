use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;

#[async_trait]
pub trait CurrentUserUseCase: Send + Sync {
    /// Returns the signed-in user or `AuthError::NotAuthenticated`.
    async fn execute(&self) -> Result<User, AuthError>;
}
