use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::preferences::errors::PreferenceError;
use crate::domain::preferences::model::Theme;
use crate::domain::preferences::repository::PreferenceStore;
use crate::domain::preferences::use_cases::toggle_theme::ToggleThemeUseCase;

pub struct ToggleThemeUseCaseImpl {
    pub store: Arc<dyn PreferenceStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleThemeUseCase for ToggleThemeUseCaseImpl {
    async fn execute(&self) -> Result<Theme, PreferenceError> {
        let theme = self.store.load_theme().await?.toggled();
        self.store.save_theme(theme).await?;

        self.logger.info(&format!("Theme switched to {theme}"));
        Ok(theme)
    }
}
