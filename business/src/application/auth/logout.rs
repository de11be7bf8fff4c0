use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::use_cases::logout::LogoutUseCase;
use crate::domain::logger::Logger;

pub struct LogoutUseCaseImpl {
    pub session: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), AuthError> {
        self.session.set_user(None).await?;
        self.logger.info("Session user cleared");
        Ok(())
    }
}
