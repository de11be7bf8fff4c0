use async_trait::async_trait;

use crate::domain::preferences::errors::PreferenceError;
use crate::domain::preferences::model::Theme;

#[async_trait]
pub trait GetThemeUseCase: Send + Sync {
    async fn execute(&self) -> Result<Theme, PreferenceError>;
}
