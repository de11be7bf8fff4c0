use async_trait::async_trait;

use business::domain::auth::model::User;
use business::domain::auth::repository::UserRepository;
use business::domain::errors::RepositoryError;

pub struct UserRepositoryInMemory {
    users: Vec<User>,
}

impl UserRepositoryInMemory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}
