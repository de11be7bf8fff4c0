use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::use_cases::current_user::CurrentUserUseCase;
use crate::domain::logger::Logger;

pub struct CurrentUserUseCaseImpl {
    pub session: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CurrentUserUseCase for CurrentUserUseCaseImpl {
    async fn execute(&self) -> Result<User, AuthError> {
        self.session
            .current_user()
            .await?
            .ok_or(AuthError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::auth::model::Role;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;

    mock! {
        pub Session {}

        #[async_trait]
        impl SessionRepository for Session {
            async fn current_user(&self) -> Result<Option<User>, RepositoryError>;
            async fn set_user(&self, user: Option<User>) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_the_signed_in_user() {
        let mut mock_session = MockSession::new();
        mock_session.expect_current_user().returning(|| {
            Ok(Some(User {
                id: UserId::new("u-1"),
                name: "Zoe Martin".to_string(),
                email: "zoe@example.com".to_string(),
                role: Role::Customer,
                created_at: Utc::now(),
            }))
        });

        let use_case = CurrentUserUseCaseImpl {
            session: Arc::new(mock_session),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id.as_str(), "u-1");
    }

    #[tokio::test]
    async fn should_fail_when_nobody_is_signed_in() {
        let mut mock_session = MockSession::new();
        mock_session.expect_current_user().returning(|| Ok(None));

        let use_case = CurrentUserUseCaseImpl {
            session: Arc::new(mock_session),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), AuthError::NotAuthenticated));
    }
}
