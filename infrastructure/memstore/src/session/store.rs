use async_trait::async_trait;
use parking_lot::RwLock;

use business::domain::auth::model::User;
use business::domain::auth::repository::SessionRepository;
use business::domain::errors::RepositoryError;

/// Holds the session's signed-in user.
#[derive(Default)]
pub struct SessionStoreInMemory {
    user: RwLock<Option<User>>,
}

impl SessionStoreInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for SessionStoreInMemory {
    async fn current_user(&self) -> Result<Option<User>, RepositoryError> {
        Ok(self.user.read().clone())
    }

    async fn set_user(&self, user: Option<User>) -> Result<(), RepositoryError> {
        *self.user.write() = user;
        Ok(())
    }
}
