use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;
use crate::domain::auth::repository::{SessionRepository, UserRepository};
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub users: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_email(&params.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.session.set_user(Some(user.clone())).await?;

        self.logger
            .info(&format!("User {} signed in as {}", user.id, user.role));
        Ok(user)
    }
}
