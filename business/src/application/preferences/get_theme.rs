use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::preferences::errors::PreferenceError;
use crate::domain::preferences::model::Theme;
use crate::domain::preferences::repository::PreferenceStore;
use crate::domain::preferences::use_cases::get_theme::GetThemeUseCase;

pub struct GetThemeUseCaseImpl {
    pub store: Arc<dyn PreferenceStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetThemeUseCase for GetThemeUseCaseImpl {
    async fn execute(&self) -> Result<Theme, PreferenceError> {
        let theme = self.store.load_theme().await?;
        self.logger.debug(&format!("Theme read: {theme}"));
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;

    mock! {
        pub Prefs {}

        #[async_trait]
        impl PreferenceStore for Prefs {
            async fn load_theme(&self) -> Result<Theme, RepositoryError>;
            async fn save_theme(&self, theme: Theme) -> Result<(), RepositoryError>;
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
    async fn should_return_the_stored_theme() {
        let mut mock_prefs = MockPrefs::new();
        mock_prefs
            .expect_load_theme()
            .returning(|| Ok(Theme::Dark));

        let use_case = GetThemeUseCaseImpl {
            store: Arc::new(mock_prefs),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Theme::Dark);
    }
}
